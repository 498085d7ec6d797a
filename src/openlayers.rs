//! Minimal `js_sys::Reflect` bridge to the OpenLayers global (`window.ol`).
//!
//! Only the handful of constructors and methods the data-center map needs are
//! reached, so no generated bindings are pulled in.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

fn namespace() -> Result<JsValue, JsValue> {
    let window = web_sys::window().ok_or("No window")?;
    let ol = js_sys::Reflect::get(&window, &JsValue::from_str("ol"))?;
    if ol.is_undefined() {
        return Err("OpenLayers (window.ol) is not loaded".into());
    }
    Ok(ol)
}

/// Looks up a dotted path below `ol`, e.g. `"style.Icon"`.
fn resolve(path: &str) -> Result<JsValue, JsValue> {
    let mut current = namespace()?;
    for segment in path.split('.') {
        current = js_sys::Reflect::get(&current, &JsValue::from_str(segment))?;
        if current.is_undefined() {
            return Err(format!("ol.{path} not found").into());
        }
    }
    Ok(current)
}

fn args_array(args: &[&JsValue]) -> js_sys::Array {
    let array = js_sys::Array::new();
    for arg in args {
        array.push(arg);
    }
    array
}

/// `new ol.<path>(...args)`
///
/// # Errors
/// Returns the JS exception if the class is missing or the constructor throws.
pub fn construct(path: &str, args: &[&JsValue]) -> Result<JsValue, JsValue> {
    let class = resolve(path)?;
    let class = class
        .dyn_ref::<js_sys::Function>()
        .ok_or_else(|| JsValue::from_str(&format!("ol.{path} is not a constructor")))?;
    js_sys::Reflect::construct(class, &args_array(args))
}

/// Calls a function found below `ol`, e.g. `ol.Observable.unByKey(key)`.
///
/// # Errors
/// Returns the JS exception if the function is missing or throws.
pub fn call_static(path: &str, args: &[&JsValue]) -> Result<JsValue, JsValue> {
    let func = resolve(path)?;
    let func = func
        .dyn_ref::<js_sys::Function>()
        .ok_or_else(|| JsValue::from_str(&format!("ol.{path} is not a function")))?;
    func.apply(&JsValue::NULL, &args_array(args))
}

/// `target.<name>(...args)`
///
/// # Errors
/// Returns the JS exception if the method is missing or throws.
pub fn call_method(target: &JsValue, name: &str, args: &[&JsValue]) -> Result<JsValue, JsValue> {
    let method = js_sys::Reflect::get(target, &JsValue::from_str(name))?;
    let method = method
        .dyn_ref::<js_sys::Function>()
        .ok_or_else(|| JsValue::from_str(&format!("{name} is not a function")))?;
    method.apply(target, &args_array(args))
}

/// Builds a plain options object from key/value pairs.
///
/// # Errors
/// Returns the JS exception if a property cannot be set.
pub fn options(entries: &[(&str, &JsValue)]) -> Result<JsValue, JsValue> {
    let object = js_sys::Object::new();
    for (key, value) in entries {
        js_sys::Reflect::set(&object, &JsValue::from_str(key), value)?;
    }
    Ok(object.into())
}

/// `[a, b]` as a JS array.
#[must_use]
pub fn pair(a: f64, b: f64) -> JsValue {
    let array = js_sys::Array::new();
    array.push(&JsValue::from_f64(a));
    array.push(&JsValue::from_f64(b));
    array.into()
}

/// Reads `[x, y]` back from a JS array.
#[must_use]
pub fn read_pair(value: &JsValue) -> Option<(f64, f64)> {
    let array = value.dyn_ref::<js_sys::Array>()?;
    Some((array.get(0).as_f64()?, array.get(1).as_f64()?))
}
