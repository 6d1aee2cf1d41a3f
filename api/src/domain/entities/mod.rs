pub mod city;
pub mod zipcode;

pub use city::City;
pub use zipcode::ZipCode;
