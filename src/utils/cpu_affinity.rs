//! Keep the benchmark thread on one CPU core while it is being timed.
//!
//! Linux pins through `libc::sched_setaffinity`. Other platforms get a no-op
//! guard: the benchmark still runs, just without pinning.

use tracing::debug;

#[cfg(target_os = "linux")]
mod platform {
    /// Saved affinity mask of the calling thread.
    pub struct SavedMask(libc::cpu_set_t);

    pub fn current_cpu() -> Option<usize> {
        // SAFETY: sched_getcpu takes no arguments and only reads thread state.
        let cpu = unsafe { libc::sched_getcpu() };
        (cpu >= 0).then_some(cpu as usize)
    }

    pub fn save_affinity() -> Option<SavedMask> {
        // SAFETY: cpu_set_t is plain data; the kernel writes at most its size.
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            let rc = libc::sched_getaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &mut set);
            (rc == 0).then_some(SavedMask(set))
        }
    }

    pub fn set_affinity(core_id: usize) -> bool {
        // SAFETY: the set is fully initialised before being passed by reference.
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            libc::CPU_ZERO(&mut set);
            libc::CPU_SET(core_id, &mut set);
            libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) == 0
        }
    }

    pub fn restore_affinity(saved: &SavedMask) -> bool {
        // SAFETY: the mask was produced by sched_getaffinity on this thread.
        unsafe {
            libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &saved.0) == 0
        }
    }
}

#[cfg(not(target_os = "linux"))]
mod platform {
    pub struct SavedMask;

    pub fn current_cpu() -> Option<usize> {
        None
    }
    pub fn save_affinity() -> Option<SavedMask> {
        None
    }
    pub fn set_affinity(_core_id: usize) -> bool {
        false
    }
    pub fn restore_affinity(_saved: &SavedMask) -> bool {
        true
    }
}

/// RAII guard: pins the current thread on creation, restores the original
/// affinity on drop.
///
/// ```ignore
/// {
///     let _pin = CpuPinGuard::pin_current();
///     // ... timed section ...
/// }
/// ```
pub struct CpuPinGuard {
    pinned_core: Option<usize>,
    saved: Option<platform::SavedMask>,
}

impl CpuPinGuard {
    /// Pin to whichever core the thread is running on right now.
    pub fn pin_current() -> Self {
        let Some(core_id) = platform::current_cpu() else {
            debug!("current cpu unknown, running unpinned");
            return Self::unpinned();
        };
        let Some(saved) = platform::save_affinity() else {
            debug!("could not read cpu affinity, running unpinned");
            return Self::unpinned();
        };

        if platform::set_affinity(core_id) {
            debug!(core_id, "pinned benchmark thread");
            Self {
                pinned_core: Some(core_id),
                saved: Some(saved),
            }
        } else {
            debug!(core_id, "sched_setaffinity failed, running unpinned");
            Self::unpinned()
        }
    }

    /// A guard that does nothing, for runs with pinning switched off.
    pub fn unpinned() -> Self {
        Self {
            pinned_core: None,
            saved: None,
        }
    }

    /// Core the thread is pinned to, if any.
    pub fn core_id(&self) -> Option<usize> {
        self.pinned_core
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned_core.is_some()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take() {
            if !platform::restore_affinity(&saved) {
                debug!("failed to restore original cpu affinity");
            }
        }
    }
}
