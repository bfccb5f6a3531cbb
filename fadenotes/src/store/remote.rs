mod internal;

pub use internal::RemoteNoteStore;
