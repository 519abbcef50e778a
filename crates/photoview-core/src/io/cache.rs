/// Holds at most one value, keyed by whatever produced it.
///
/// Any request with a different key evicts the held value. Used by the decoder
/// to keep the last fully decoded image while the user pans and zooms it.
#[derive(Debug)]
pub struct SingleEntryCache<K, V> {
    entry: Option<(K, V)>,
}

impl<K: PartialEq, V> SingleEntryCache<K, V> {
    pub fn new() -> Self {
        Self { entry: None }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        match &self.entry {
            Some((k, v)) if k == key => Some(v),
            _ => None,
        }
    }

    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Return the value for `key`, computing it with `load` on a miss.
    ///
    /// A failed load leaves the cache empty so the next call retries.
    pub fn get_or_try_insert_with<E>(
        &mut self,
        key: K,
        load: impl FnOnce(&K) -> Result<V, E>,
    ) -> Result<&V, E> {
        let entry = match self.entry.take().filter(|(k, _)| *k == key) {
            Some(hit) => hit,
            None => {
                let value = load(&key)?;
                (key, value)
            }
        };
        let (_, v) = self.entry.insert(entry);
        Ok(v)
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}

impl<K: PartialEq, V> Default for SingleEntryCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
