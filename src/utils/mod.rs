pub mod date;
pub mod path;
pub mod price;
pub mod table;
