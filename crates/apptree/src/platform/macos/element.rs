/*! Opaque AX element handles with safe accessor methods.

All element-level unsafe code is encapsulated here. Attribute queries that
the element's role does not support come back as `None` - the traversal
layer treats that as missing data, never as a failure.
*/

#![allow(unsafe_code)]

use crate::platform::{ElementAttributes, ElementProvider};

use super::util::app_element;
use crate::a11y::Value;
use crate::types::{ProcessId, Rect};
use objc2_application_services::{AXError, AXUIElement, AXValue as AXValueRef, AXValueType};
use objc2_core_foundation::{
  CFArray, CFBoolean, CFNumber, CFRetained, CFString, CFType, CGPoint, CGSize,
};
use std::ffi::c_void;
use std::ptr::NonNull;

/// Opaque handle to a UI element. Clone is cheap (reference counted).
#[derive(Clone)]
pub(crate) struct AxElement {
  inner: CFRetained<AXUIElement>,
}

impl std::fmt::Debug for AxElement {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("AxElement").finish_non_exhaustive()
  }
}

impl AxElement {
  pub(super) const fn new(inner: CFRetained<AXUIElement>) -> Self {
    Self { inner }
  }

  fn get_raw_attr(&self, attr: &CFString) -> Option<CFRetained<CFType>> {
    unsafe {
      let mut value: *const CFType = std::ptr::null();
      let result = self
        .inner
        .copy_attribute_value(attr, NonNull::new(&raw mut value)?);
      if result != AXError::Success || value.is_null() {
        return None;
      }
      Some(CFRetained::from_raw(NonNull::new_unchecked(
        value.cast_mut(),
      )))
    }
  }

  /// Get string attribute by name.
  fn get_string(&self, attr: &str) -> Option<String> {
    let value = self.get_raw_attr(&CFString::from_str(attr))?;
    let s = value.downcast_ref::<CFString>()?.to_string();
    if s.is_empty() {
      None
    } else {
      Some(s)
    }
  }

  /// Get bounds (position + size) in screen coordinates.
  fn get_bounds(&self) -> Option<Rect> {
    let pos = self.get_raw_attr(&CFString::from_static_str("AXPosition"))?;
    let sz = self.get_raw_attr(&CFString::from_static_str("AXSize"))?;
    let pos = pos.downcast_ref::<AXValueRef>()?;
    let sz = sz.downcast_ref::<AXValueRef>()?;

    unsafe {
      if pos.r#type() != AXValueType::CGPoint || sz.r#type() != AXValueType::CGSize {
        return None;
      }
      let mut point = CGPoint { x: 0.0, y: 0.0 };
      let mut size = CGSize {
        width: 0.0,
        height: 0.0,
      };

      if !pos.value(
        AXValueType::CGPoint,
        NonNull::new((&raw mut point).cast::<c_void>())?,
      ) {
        return None;
      }
      if !sz.value(
        AXValueType::CGSize,
        NonNull::new((&raw mut size).cast::<c_void>())?,
      ) {
        return None;
      }

      Some(Rect::new(point.x, point.y, size.width, size.height))
    }
  }

  /// Get child elements.
  fn get_children(&self) -> Vec<AxElement> {
    let Some(value) = self.get_raw_attr(&CFString::from_static_str("AXChildren")) else {
      return Vec::new();
    };
    elements_from_cf_array(value)
  }

  /// Get the element's typed value. Toggle-like roles report 0/1 integers,
  /// which become booleans.
  fn get_value(&self, role: Option<&str>) -> Option<Value> {
    let raw = self.get_raw_attr(&CFString::from_static_str("AXValue"))?;

    if let Some(cf_string) = raw.downcast_ref::<CFString>() {
      return Some(Value::String(cf_string.to_string()));
    }

    if let Some(cf_number) = raw.downcast_ref::<CFNumber>() {
      let toggle_like = role.is_some_and(|r| {
        r.contains("CheckBox") || r.contains("RadioButton") || r.contains("Toggle")
      });
      if toggle_like {
        if let Some(int_val) = cf_number.as_i64() {
          return Some(Value::Boolean(int_val != 0));
        }
      }
      if let Some(float_val) = cf_number.as_f64() {
        return Some(Value::Number(float_val));
      }
    }

    if let Some(cf_bool) = raw.downcast_ref::<CFBoolean>() {
      return Some(Value::Boolean(cf_bool.as_bool()));
    }

    None
  }
}

impl ElementProvider for AxElement {
  fn attributes(&self) -> ElementAttributes {
    let role = self.get_string("AXRole");
    let value = self.get_value(role.as_deref());
    ElementAttributes {
      role,
      name: self
        .get_string("AXTitle")
        .or_else(|| self.get_string("AXDescription")),
      value,
      bounds: self.get_bounds(),
    }
  }

  fn children(&self) -> Vec<Self> {
    self.get_children()
  }
}

/// Fetch the window elements an application reports (`AXWindows`).
pub(super) fn application_windows(pid: ProcessId) -> Vec<AxElement> {
  let app = AxElement::new(app_element(pid.0));
  let Some(value) = app.get_raw_attr(&CFString::from_static_str("AXWindows")) else {
    return Vec::new();
  };
  elements_from_cf_array(value)
}

fn elements_from_cf_array(value: CFRetained<CFType>) -> Vec<AxElement> {
  let Some(array) = value.downcast::<CFArray>().ok() else {
    return Vec::new();
  };
  // SAFETY: AXChildren/AXWindows always return arrays of AXUIElements
  let typed_array: CFRetained<CFArray<AXUIElement>> = unsafe { CFRetained::cast_unchecked(array) };

  let len = typed_array.len();
  let mut elements = Vec::with_capacity(len);
  for i in 0..len {
    if let Some(element) = typed_array.get(i) {
      elements.push(AxElement::new(element));
    }
  }
  elements
}
