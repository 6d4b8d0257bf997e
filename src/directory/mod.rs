mod contact_directory;
mod shared_directory;
mod traits;

pub use contact_directory::ContactDirectory;
pub use shared_directory::SharedDirectory;
pub use traits::ContactStore;
