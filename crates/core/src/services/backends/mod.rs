pub mod dump_file;
pub mod swfdump;

pub use dump_file::DumpFileBackend;
pub use swfdump::SwfDumpBackend;
