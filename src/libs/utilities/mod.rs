// Shell rc file reading, locking and appending.
pub mod file_operations;
