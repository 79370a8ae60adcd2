mod archive;

pub use archive::ArchiveError;
pub use archive::ArchiveManager;
