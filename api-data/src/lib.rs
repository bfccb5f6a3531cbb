pub mod model;

#[cfg(test)] mod test;
