// Pure text transforms shared by all five templates. No I/O, no state.

pub mod dates;
pub mod links;
pub mod skills;
pub mod text;

