mod region_code;

pub use region_code::RegionCode;
