mod internal;

pub use internal::LocalNoteStore;
