use std::fmt;
use std::str::FromStr;

/// Comparison and swap counts collected while sorting one array.
///
/// "Swap" follows the usual benchmark convention: an exchange for the
/// exchange-based sorts, an element shift for insertion sort, and an element
/// write-back for merge sort.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OpCounter {
    pub comparisons: u64,
    pub swaps: u64,
}

impl OpCounter {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn compare(&mut self) {
        self.comparisons += 1;
    }

    #[inline]
    fn swap(&mut self) {
        self.swaps += 1;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortAlgorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 6] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Insertion,
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
        SortAlgorithm::Heap,
    ];

    /// Name written to the benchmark table; matches the standard complexity table.
    pub fn name(self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "Bubble Sort",
            SortAlgorithm::Selection => "Selection Sort",
            SortAlgorithm::Insertion => "Insertion Sort",
            SortAlgorithm::Merge => "Merge Sort",
            SortAlgorithm::Quick => "Quick Sort",
            SortAlgorithm::Heap => "Heap Sort",
        }
    }

    /// Sort `data` ascending in place, counting into `counter`.
    pub fn sort(self, data: &mut [i32], counter: &mut OpCounter) {
        match self {
            SortAlgorithm::Bubble => bubble_sort(data, counter),
            SortAlgorithm::Selection => selection_sort(data, counter),
            SortAlgorithm::Insertion => insertion_sort(data, counter),
            SortAlgorithm::Merge => merge_sort(data, counter),
            SortAlgorithm::Quick => quick_sort(data, counter),
            SortAlgorithm::Heap => heap_sort(data, counter),
        }
    }

    /// Convenience wrapper returning a fresh counter.
    pub fn sort_counted(self, data: &mut [i32]) -> OpCounter {
        let mut counter = OpCounter::new();
        self.sort(data, &mut counter);
        counter
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortAlgorithm {
    type Err = String;

    /// Accepts the table name ("Merge Sort") or a short form ("merge").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let short = normalized.strip_suffix(" sort").unwrap_or(&normalized);
        match short {
            "bubble" => Ok(SortAlgorithm::Bubble),
            "selection" => Ok(SortAlgorithm::Selection),
            "insertion" => Ok(SortAlgorithm::Insertion),
            "merge" => Ok(SortAlgorithm::Merge),
            "quick" => Ok(SortAlgorithm::Quick),
            "heap" => Ok(SortAlgorithm::Heap),
            _ => Err(format!("unknown sorting algorithm `{}`", s)),
        }
    }
}

pub fn bubble_sort(data: &mut [i32], counter: &mut OpCounter) {
    let n = data.len();
    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            counter.compare();
            if data[j] > data[j + 1] {
                counter.swap();
                data.swap(j, j + 1);
            }
        }
    }
}

pub fn selection_sort(data: &mut [i32], counter: &mut OpCounter) {
    let n = data.len();
    for i in 0..n.saturating_sub(1) {
        let mut min_index = i;
        for j in i + 1..n {
            counter.compare();
            if data[j] < data[min_index] {
                min_index = j;
            }
        }
        if min_index != i {
            counter.swap();
            data.swap(min_index, i);
        }
    }
}

pub fn insertion_sort(data: &mut [i32], counter: &mut OpCounter) {
    for i in 1..data.len() {
        let key = data[i];
        let mut j = i;
        while j > 0 {
            counter.compare();
            if data[j - 1] > key {
                counter.swap();
                data[j] = data[j - 1];
                j -= 1;
            } else {
                break;
            }
        }
        data[j] = key;
    }
}

/// Top-down merge sort; the left half takes the middle element.
pub fn merge_sort(data: &mut [i32], counter: &mut OpCounter) {
    if data.len() < 2 {
        return;
    }
    let mid = (data.len() - 1) / 2;
    merge_sort(&mut data[..=mid], counter);
    merge_sort(&mut data[mid + 1..], counter);
    merge(data, mid + 1, counter);
}

fn merge(data: &mut [i32], split: usize, counter: &mut OpCounter) {
    let left = data[..split].to_vec();
    let right = data[split..].to_vec();

    let (mut i, mut j, mut k) = (0, 0, 0);
    while i < left.len() && j < right.len() {
        counter.compare();
        if left[i] <= right[j] {
            data[k] = left[i];
            i += 1;
        } else {
            data[k] = right[j];
            j += 1;
        }
        counter.swap();
        k += 1;
    }
    for &v in left[i..].iter().chain(&right[j..]) {
        data[k] = v;
        counter.swap();
        k += 1;
    }
}

/// Lomuto quicksort with a median-of-three pivot.
///
/// Recurses into the smaller partition and loops on the larger one, so stack
/// depth stays logarithmic even when every element is equal.
pub fn quick_sort(mut data: &mut [i32], counter: &mut OpCounter) {
    while data.len() >= 2 {
        let pivot_index = partition(data, counter);
        let (left, right) = std::mem::take(&mut data).split_at_mut(pivot_index);
        let right = &mut right[1..];
        if left.len() < right.len() {
            quick_sort(left, counter);
            data = right;
        } else {
            quick_sort(right, counter);
            data = left;
        }
    }
}

fn partition(data: &mut [i32], counter: &mut OpCounter) -> usize {
    let high = data.len() - 1;
    let mid = high / 2;

    // Order low/mid/high; these exchanges are not counted as swaps
    counter.compare();
    if data[mid] < data[0] {
        data.swap(0, mid);
    }
    counter.compare();
    if data[high] < data[0] {
        data.swap(0, high);
    }
    counter.compare();
    if data[high] < data[mid] {
        data.swap(mid, high);
    }
    data.swap(mid, high);

    let pivot = data[high];
    let mut store = 0;
    for j in 0..high {
        counter.compare();
        if data[j] < pivot {
            counter.swap();
            data.swap(store, j);
            store += 1;
        }
    }
    counter.swap();
    data.swap(store, high);
    store
}

pub fn heap_sort(data: &mut [i32], counter: &mut OpCounter) {
    let n = data.len();
    for i in (0..n / 2).rev() {
        sift_down(data, n, i, counter);
    }
    for end in (1..n).rev() {
        counter.swap();
        data.swap(0, end);
        sift_down(data, end, 0, counter);
    }
}

fn sift_down(data: &mut [i32], len: usize, mut root: usize, counter: &mut OpCounter) {
    loop {
        let mut largest = root;
        let left = 2 * root + 1;
        let right = left + 1;

        if left < len {
            counter.compare();
            if data[left] > data[largest] {
                largest = left;
            }
        }
        if right < len {
            counter.compare();
            if data[right] > data[largest] {
                largest = right;
            }
        }
        if largest == root {
            return;
        }
        counter.swap();
        data.swap(root, largest);
        root = largest;
    }
}
