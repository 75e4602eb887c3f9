use serde::Serialize;
use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicUsize, Ordering};

static ALLOCATED: AtomicUsize = AtomicUsize::new(0);

/// Counting allocator wrapping [`System`].
///
/// Install it in a binary to measure live heap bytes:
///
/// ```ignore
/// #[global_allocator]
/// static ALLOC: tribench::benchmarks::memory_tracker::TrackingAllocator =
///     tribench::benchmarks::memory_tracker::TrackingAllocator;
/// ```
pub struct TrackingAllocator;

unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            ALLOCATED.fetch_add(layout.size(), Ordering::Relaxed);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        ALLOCATED.fetch_sub(layout.size(), Ordering::Relaxed);
        unsafe { System.dealloc(ptr, layout) };
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
        if !new_ptr.is_null() {
            if new_size >= layout.size() {
                ALLOCATED.fetch_add(new_size - layout.size(), Ordering::Relaxed);
            } else {
                ALLOCATED.fetch_sub(layout.size() - new_size, Ordering::Relaxed);
            }
        }
        new_ptr
    }
}

impl TrackingAllocator {
    /// Whether this allocator is serving the process. Nothing is counted otherwise.
    pub fn is_active() -> bool {
        ALLOCATED.load(Ordering::Relaxed) > 0
    }

    /// Live heap bytes.
    pub fn allocated_bytes() -> usize {
        ALLOCATED.load(Ordering::Relaxed)
    }
}

/// Where a memory figure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MemorySource {
    /// Live heap bytes counted by [`TrackingAllocator`]
    Heap,
    /// Process resident set size, an approximation that includes freed-but-retained pages
    ResidentSet,
    /// No measurement available on this platform
    Unavailable,
}

impl MemorySource {
    pub fn is_approximate(self) -> bool {
        self != MemorySource::Heap
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MemorySample {
    pub bytes: usize,
    pub source: MemorySource,
}

impl MemorySample {
    /// Whole megabytes, rounded down.
    pub fn megabytes(&self) -> usize {
        self.bytes / 1024 / 1024
    }
}

/// Memory measurement for benchmarking purposes
#[derive(Debug, Clone, Default)]
pub struct MemoryTracker;

impl MemoryTracker {
    pub fn new() -> Self {
        Self
    }

    /// Source that [`MemoryTracker::measure`] will use.
    pub fn source(&self) -> MemorySource {
        if TrackingAllocator::is_active() {
            MemorySource::Heap
        } else if self.resident_set_bytes().is_some() {
            MemorySource::ResidentSet
        } else {
            MemorySource::Unavailable
        }
    }

    /// Current memory usage.
    pub fn measure(&self) -> MemorySample {
        if TrackingAllocator::is_active() {
            return MemorySample {
                bytes: TrackingAllocator::allocated_bytes(),
                source: MemorySource::Heap,
            };
        }
        match self.resident_set_bytes() {
            Some(bytes) => MemorySample { bytes, source: MemorySource::ResidentSet },
            None => MemorySample { bytes: 0, source: MemorySource::Unavailable },
        }
    }

    /// Bring memory to a quiet state before a measurement and return the baseline.
    ///
    /// Ownership releases memory as soon as a value is dropped, so there is no deferred
    /// garbage to collect; callers drop stale data before calling this.
    pub fn quiesce(&self) -> MemorySample {
        let baseline = self.measure();
        log::debug!(
            "Memory quiesced at {} ({:?})",
            Self::format_bytes(baseline.bytes),
            baseline.source
        );
        baseline
    }

    fn resident_set_bytes(&self) -> Option<usize> {
        #[cfg(target_os = "linux")]
        {
            self.get_memory_linux()
        }
        #[cfg(target_os = "macos")]
        {
            self.get_memory_macos().ok()
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux")))]
        {
            None
        }
    }

    #[cfg(target_os = "macos")]
    fn get_memory_macos(&self) -> Result<usize, Box<dyn std::error::Error>> {
        use std::process::Command;

        let output = Command::new("ps")
            .args(["-o", "rss=", "-p", &std::process::id().to_string()])
            .output()?;

        if output.status.success() {
            let rss_str = std::str::from_utf8(&output.stdout)?;
            let rss_kb: usize = rss_str.trim().parse()?;
            Ok(rss_kb * 1024)
        } else {
            Err("ps command failed".into())
        }
    }

    #[cfg(target_os = "linux")]
    fn get_memory_linux(&self) -> Option<usize> {
        let contents = std::fs::read_to_string("/proc/self/status").ok()?;
        let line = contents.lines().find(|line| line.starts_with("VmRSS:"))?;
        let kb: usize = line.split_whitespace().nth(1)?.parse().ok()?;
        Some(kb * 1024)
    }

    /// Format bytes in human-readable format
    #[allow(clippy::cast_precision_loss)]
    pub fn format_bytes(bytes: usize) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        format!("{:.2} {}", size, UNITS[unit_index])
    }
}
