//! Windows version lookup

use windows::Wdk::System::SystemServices::RtlGetVersion;
use windows::Win32::System::SystemInformation::OSVERSIONINFOW;

/// Major version of the running Windows kernel.
///
/// `RtlGetVersion` is not subject to the manifest-based version lie of
/// `GetVersionExW`.
pub fn major_version() -> Option<u32> {
    let mut info = OSVERSIONINFOW {
        dwOSVersionInfoSize: std::mem::size_of::<OSVERSIONINFOW>() as u32,
        ..Default::default()
    };

    let status = unsafe { RtlGetVersion(&mut info) };
    if status.is_ok() {
        Some(info.dwMajorVersion)
    } else {
        None
    }
}
