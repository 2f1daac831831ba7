use std::{fmt, mem, num::NonZeroUsize};

use crate::error::DictError;

/// Количество бакетов по умолчанию. Простое число уменьшает скучивание
/// ключей, образующих арифметическую прогрессию.
pub const DEFAULT_BUCKETS: usize = 100_003;

const DEFAULT_BUCKET_COUNT: NonZeroUsize = match NonZeroUsize::new(DEFAULT_BUCKETS) {
    Some(n) => n,
    None => panic!("DEFAULT_BUCKETS must be non-zero"),
};

/// Один элемент в цепочке коллизий.
struct Entry<V> {
    key: i64,
    val: V,
    next: Chain<V>,
}

/// Голова цепочки одного бакета.
type Chain<V> = Option<Box<Entry<V>>>;

/// Сводка по заполненности таблицы.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DictStats {
    pub entries: usize,
    pub occupied_buckets: usize,
    pub longest_chain: usize,
    pub load_factor: f64,
}

/// Хеш-таблица с фиксированным числом бакетов и разрешением коллизий
/// цепочками.
///
/// **ИНВАРИАНТЫ:**
///
/// - ключ `k` хранится только в цепочке `bucket_index(k, bucket_count)`;
/// - внутри цепочки каждый ключ встречается не более одного раза;
/// - число бакетов задаётся при создании и больше не меняется, элементы
///   между бакетами не перемещаются;
/// - `used` равно суммарной длине всех цепочек.
pub struct FixedDict<V> {
    buckets: Box<[Chain<V>]>,
    bucket_count: NonZeroUsize,
    used: usize,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl<V> Entry<V> {
    /// Создаёт новый (последний) элемент цепочки.
    fn new(
        key: i64,
        val: V,
    ) -> Box<Self> {
        Box::new(Entry {
            key,
            val,
            next: None,
        })
    }
}

/// Вычисляет индекс бакета для ключа.
///
/// `((key mod n) + n) mod n`: остаток от деления знакового числа может быть
/// отрицательным, второе взятие по модулю возвращает его в `[0, n)`.
/// Вычисления идут в `i128`, поэтому `i64::MIN` и любое `n: usize` не
/// переполняются.
#[inline]
pub fn bucket_index(
    key: i64,
    bucket_count: NonZeroUsize,
) -> usize {
    let n = bucket_count.get() as i128;
    ((key as i128 % n + n) % n) as usize
}

impl<V> FixedDict<V> {
    /// Создаёт пустой словарь с `DEFAULT_BUCKETS` бакетами.
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_BUCKET_COUNT)
    }

    /// Создаёт пустой словарь с заданным числом бакетов.
    pub fn with_buckets(bucket_count: NonZeroUsize) -> Self {
        let mut buckets = Vec::with_capacity(bucket_count.get());
        buckets.resize_with(bucket_count.get(), || None);

        FixedDict {
            buckets: buckets.into_boxed_slice(),
            bucket_count,
            used: 0,
        }
    }

    /// То же, что [`FixedDict::with_buckets`], но для непроверенного числа.
    pub fn try_with_buckets(bucket_count: usize) -> Result<Self, DictError> {
        NonZeroUsize::new(bucket_count)
            .map(Self::with_buckets)
            .ok_or(DictError::ZeroBuckets)
    }

    /// Вставляет пару `(key, val)`.
    ///
    /// Если ключ уже есть, значение заменяется на месте и возвращается
    /// `false`. Иначе новый элемент добавляется в конец цепочки и
    /// возвращается `true`.
    pub fn insert(
        &mut self,
        key: i64,
        val: V,
    ) -> bool {
        let slot = self.slot(key);
        let mut cur = &mut self.buckets[slot];

        while let Some(e) = cur {
            if e.key == key {
                e.val = val;
                return false;
            }

            cur = &mut e.next;
        }

        *cur = Some(Entry::new(key, val));
        self.used += 1;

        true
    }

    /// Возвращает `Some(&V)` для указанного ключа или `None`.
    pub fn get(
        &self,
        key: i64,
    ) -> Option<&V> {
        let mut cur = self.buckets[self.slot(key)].as_deref();

        while let Some(e) = cur {
            if e.key == key {
                return Some(&e.val);
            }

            cur = e.next.as_deref();
        }

        None
    }

    /// Возвращает `true`, если ключ присутствует.
    pub fn contains_key(
        &self,
        key: i64,
    ) -> bool {
        self.get(key).is_some()
    }

    /// Удаляет ключ и возвращает его значение. Порядок остальных элементов
    /// цепочки сохраняется.
    pub fn remove(
        &mut self,
        key: i64,
    ) -> Option<V> {
        let slot = self.slot(key);
        let val = Self::remove_from_chain(&mut self.buckets[slot], key)?;

        self.used -= 1;

        Some(val)
    }

    /// Возвращает общее количество элементов.
    pub fn len(&self) -> usize {
        self.used
    }

    /// Возвращает `true`, если словарь пуст.
    pub fn is_empty(&self) -> bool {
        self.used == 0
    }

    /// Число бакетов, заданное при создании.
    pub fn bucket_count(&self) -> NonZeroUsize {
        self.bucket_count
    }

    /// Длина цепочки в бакете `bucket` (0 для индекса вне таблицы).
    pub fn chain_len(
        &self,
        bucket: usize,
    ) -> usize {
        self.buckets
            .get(bucket)
            .map_or(0, |head| Self::count_chain(head))
    }

    /// Собирает статистику заполненности за один проход по бакетам.
    pub fn stats(&self) -> DictStats {
        let mut occupied_buckets = 0;
        let mut longest_chain = 0;

        for head in self.buckets.iter() {
            let len = Self::count_chain(head);

            if len > 0 {
                occupied_buckets += 1;
                longest_chain = longest_chain.max(len);
            }
        }

        DictStats {
            entries: self.used,
            occupied_buckets,
            longest_chain,
            load_factor: self.used as f64 / self.buckets.len() as f64,
        }
    }

    /// Однопроходное удаление первого узла с ключом `key`: узел заменяется
    /// своим хвостом.
    fn remove_from_chain(
        head: &mut Chain<V>,
        key: i64,
    ) -> Option<V> {
        let mut cur = head;
        loop {
            match cur {
                None => return None,
                Some(node) if node.key == key => {
                    let tail = node.next.take();
                    let removed = mem::replace(cur, tail);
                    return removed.map(|node| node.val);
                }
                Some(node) => {
                    cur = &mut node.next;
                }
            }
        }
    }

    fn count_chain(head: &Chain<V>) -> usize {
        let mut len = 0;
        let mut cur = head.as_deref();

        while let Some(e) = cur {
            len += 1;
            cur = e.next.as_deref();
        }

        len
    }

    #[inline]
    fn slot(
        &self,
        key: i64,
    ) -> usize {
        bucket_index(key, self.bucket_count)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Общие реализации трейтов для FixedDict
////////////////////////////////////////////////////////////////////////////////

impl<V> Default for FixedDict<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for FixedDict<V> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("FixedDict")
            .field("bucket_count", &self.bucket_count)
            .field("len", &self.used)
            .finish_non_exhaustive()
    }
}

/// Цепочки разбираются итеративно: рекурсивный drop `Box` переполнил бы стек
/// на вырожденной таблице, где все ключи попали в один бакет.
impl<V> Drop for FixedDict<V> {
    fn drop(&mut self) {
        for head in self.buckets.iter_mut() {
            let mut cur = head.take();

            while let Some(mut node) = cur {
                cur = node.next.take();
            }
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
