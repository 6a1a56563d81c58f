mod common;

mod relocation;
