pub mod fdlibm;
pub mod policy;
