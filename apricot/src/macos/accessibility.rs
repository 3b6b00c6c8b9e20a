use core_foundation::{
    base::{CFTypeID, TCFType},
    boolean::CFBoolean,
    declare_TCFType, impl_TCFType,
    string::{CFString, CFStringRef},
};
use core_graphics::geometry::{CGPoint, CGSize};
use std::ffi::c_void;
use std::ptr;

pub type AXError = i32;
pub const AX_ERROR_SUCCESS: AXError = 0;
pub const AX_ERROR_FAILURE: AXError = -25200;

#[repr(C)]
pub struct __AXUIElement(c_void);
pub type AXUIElementRef = *mut __AXUIElement;

declare_TCFType!(AXUIElement, AXUIElementRef);
impl_TCFType!(AXUIElement, AXUIElementRef, AXUIElementGetTypeID);

#[link(name = "ApplicationServices", kind = "framework")]
extern "C" {
    fn AXUIElementGetTypeID() -> CFTypeID;
    fn AXIsProcessTrusted() -> bool;
    fn AXIsProcessTrustedWithOptions(options: *const c_void) -> bool;
    fn AXUIElementCreateSystemWide() -> AXUIElementRef;
    fn AXUIElementCopyAttributeValue(
        element: AXUIElementRef,
        attribute: CFStringRef,
        value: *mut *mut c_void,
    ) -> AXError;
    fn AXUIElementSetAttributeValue(
        element: AXUIElementRef,
        attribute: CFStringRef,
        value: *const c_void,
    ) -> AXError;
    fn AXValueCreate(value_type: u32, value: *const c_void) -> *mut c_void;
    fn CFRelease(cf: *const c_void);
}

const AX_VALUE_TYPE_CGPOINT: u32 = 1;
const AX_VALUE_TYPE_CGSIZE: u32 = 2;

mod attr {
    pub const FOCUSED_WINDOW: &str = "AXFocusedWindow";
    pub const FOCUSED_APPLICATION: &str = "AXFocusedApplication";
    pub const POSITION: &str = "AXPosition";
    pub const SIZE: &str = "AXSize";
}

pub fn is_trusted() -> bool {
    unsafe { AXIsProcessTrusted() }
}

/// Check trust and ask the system to show the permission dialog if missing.
pub fn is_trusted_with_prompt() -> bool {
    use core_foundation::dictionary::CFDictionary;

    let key = CFString::new("AXTrustedCheckOptionPrompt");
    let dict = CFDictionary::from_CFType_pairs(&[(key, CFBoolean::true_value())]);

    unsafe { AXIsProcessTrustedWithOptions(dict.as_concrete_TypeRef() as *const c_void) }
}

impl AXUIElement {
    pub fn system_wide() -> Self {
        unsafe {
            let raw = AXUIElementCreateSystemWide();
            Self::wrap_under_create_rule(raw)
        }
    }

    fn get_attribute(&self, name: &str) -> Result<*mut c_void, AXError> {
        let attr = CFString::new(name);
        let mut value: *mut c_void = ptr::null_mut();
        let err = unsafe {
            AXUIElementCopyAttributeValue(
                self.as_concrete_TypeRef(),
                attr.as_concrete_TypeRef(),
                &mut value,
            )
        };
        if err == AX_ERROR_SUCCESS && !value.is_null() {
            Ok(value)
        } else {
            Err(err)
        }
    }

    fn set_value(&self, name: &str, value_type: u32, value: *const c_void) -> Result<(), AXError> {
        let ax_value = unsafe { AXValueCreate(value_type, value) };
        if ax_value.is_null() {
            return Err(AX_ERROR_FAILURE);
        }

        let attr = CFString::new(name);
        let err = unsafe {
            let err = AXUIElementSetAttributeValue(
                self.as_concrete_TypeRef(),
                attr.as_concrete_TypeRef(),
                ax_value,
            );
            CFRelease(ax_value);
            err
        };
        if err == AX_ERROR_SUCCESS {
            Ok(())
        } else {
            Err(err)
        }
    }

    pub fn set_position(&self, point: CGPoint) -> Result<(), AXError> {
        self.set_value(
            attr::POSITION,
            AX_VALUE_TYPE_CGPOINT,
            &point as *const CGPoint as *const c_void,
        )
    }

    pub fn set_size(&self, size: CGSize) -> Result<(), AXError> {
        self.set_value(
            attr::SIZE,
            AX_VALUE_TYPE_CGSIZE,
            &size as *const CGSize as *const c_void,
        )
    }

    pub fn focused_window(&self) -> Result<AXUIElement, AXError> {
        let value = self.get_attribute(attr::FOCUSED_WINDOW)?;
        Ok(unsafe { AXUIElement::wrap_under_create_rule(value as AXUIElementRef) })
    }

    pub fn focused_application(&self) -> Result<AXUIElement, AXError> {
        let value = self.get_attribute(attr::FOCUSED_APPLICATION)?;
        Ok(unsafe { AXUIElement::wrap_under_create_rule(value as AXUIElementRef) })
    }
}

/// Focused window of the frontmost application.
pub fn get_focused_window() -> Result<AXUIElement, AXError> {
    let system = AXUIElement::system_wide();
    let app = system.focused_application()?;
    app.focused_window()
}
