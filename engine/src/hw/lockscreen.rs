use crate::message::SessionEvent;
use tokio::sync::mpsc::Sender;

/// Start listening for session lock/unlock broadcasts and forward each one
/// into `tx`, in delivery order. The listener runs on its own thread for the
/// rest of the process; there is no unsubscribe.
#[cfg(target_os = "macos")]
pub fn subscribe(tx: Sender<SessionEvent>) {
    std::thread::spawn(move || macos::observe(tx));
}

/// No distributed notification source on this platform. The channel is held
/// open so consumers wait for events that never come instead of seeing a
/// closed channel and exiting.
#[cfg(not(target_os = "macos"))]
pub fn subscribe(tx: Sender<SessionEvent>) {
    std::thread::spawn(move || {
        let _keep_alive = tx;
        loop {
            std::thread::park();
        }
    });
}

#[cfg(target_os = "macos")]
mod macos {
    use crate::message::SessionEvent;
    use std::os::raw::{c_char, c_void};
    use std::ptr;
    use tokio::sync::mpsc::Sender;

    type CFNotificationCenterRef = *mut c_void;
    type CFStringRef = *const c_void;
    type CFIndex = isize;

    type CFNotificationCallback = extern "C" fn(
        center: CFNotificationCenterRef,
        observer: *mut c_void,
        name: CFStringRef,
        object: *const c_void,
        user_info: *const c_void,
    );

    const UTF8_ENCODING: u32 = 0x0800_0100;
    // kCFNotificationSuspensionBehaviorDeliverImmediately
    const DELIVER_IMMEDIATELY: CFIndex = 4;

    #[link(name = "CoreFoundation", kind = "framework")]
    unsafe extern "C" {
        fn CFNotificationCenterGetDistributedCenter() -> CFNotificationCenterRef;
        fn CFNotificationCenterAddObserver(
            center: CFNotificationCenterRef,
            observer: *const c_void,
            callback: CFNotificationCallback,
            name: CFStringRef,
            object: *const c_void,
            suspension_behavior: CFIndex,
        );
        fn CFStringCreateWithCString(
            alloc: *const c_void,
            c_str: *const c_char,
            encoding: u32,
        ) -> CFStringRef;
        fn CFRunLoopRun();
    }

    /// Register both observers on the distributed notification center and
    /// run this thread's run loop forever. The sender box is never
    /// reclaimed; the run loop outlives it.
    pub(super) fn observe(tx: Sender<SessionEvent>) {
        let observer = Box::into_raw(Box::new(tx)) as *const c_void;
        unsafe {
            let center = CFNotificationCenterGetDistributedCenter();
            let locked = CFStringCreateWithCString(
                ptr::null(),
                c"com.apple.screenIsLocked".as_ptr(),
                UTF8_ENCODING,
            );
            let unlocked = CFStringCreateWithCString(
                ptr::null(),
                c"com.apple.screenIsUnlocked".as_ptr(),
                UTF8_ENCODING,
            );
            CFNotificationCenterAddObserver(
                center,
                observer,
                on_locked,
                locked,
                ptr::null(),
                DELIVER_IMMEDIATELY,
            );
            CFNotificationCenterAddObserver(
                center,
                observer,
                on_unlocked,
                unlocked,
                ptr::null(),
                DELIVER_IMMEDIATELY,
            );
            CFRunLoopRun();
        }
    }

    extern "C" fn on_locked(
        _center: CFNotificationCenterRef,
        observer: *mut c_void,
        _name: CFStringRef,
        _object: *const c_void,
        _user_info: *const c_void,
    ) {
        forward(observer, SessionEvent::Locked);
    }

    extern "C" fn on_unlocked(
        _center: CFNotificationCenterRef,
        observer: *mut c_void,
        _name: CFStringRef,
        _object: *const c_void,
        _user_info: *const c_void,
    ) {
        forward(observer, SessionEvent::Unlocked);
    }

    fn forward(observer: *mut c_void, event: SessionEvent) {
        let tx = unsafe { &*(observer as *const Sender<SessionEvent>) };
        let _ = tx.blocking_send(event);
    }
}
