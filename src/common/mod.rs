mod fs;
mod geog;

pub use fs::write_output;
pub use geog::{state_fips_to_name, state_name_or_unknown};
