/// Operations the command layer needs from a key-value store.
///
/// Missing keys are a normal outcome and come back as `None`, never as an
/// error.
pub trait Storage {
    /// Inserts `value` under `key`, replacing any previous value.
    fn put(&mut self, key: i64, value: i64);
    fn get(&self, key: i64) -> Option<i64>;
    /// Removes `key` and returns the value it held.
    fn delete(&mut self, key: i64) -> Option<i64>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
