//! Utilities for JLS binary names.
//!
//! A binary name identifies a type at the bytecode level: packages are
//! dot-separated, nested classes are `$`-separated, and array types append
//! one `[]` per dimension to the component's binary name. These helpers are
//! pure string operations; they never consult a classpath.

/// Binary name of `java.lang.Object`.
pub const OBJECT: &str = "java.lang.Object";

/// Binary name of `java.lang.Cloneable`.
pub const CLONEABLE: &str = "java.lang.Cloneable";

/// Binary name of `java.io.Serializable`.
pub const SERIALIZABLE: &str = "java.io.Serializable";

/// Binary name of `java.lang.Enum`, the implicit superclass of enums.
pub const ENUM: &str = "java.lang.Enum";

/// Binary name of `java.lang.annotation.Annotation`, the implicit
/// super-interface of annotation types.
pub const ANNOTATION: &str = "java.lang.annotation.Annotation";

/// Suffix appended to a component's binary name per array dimension.
pub const ARRAY_SUFFIX: &str = "[]";

/// Returns the simple name of a binary name: the segment after the last
/// package separator and the last nesting separator.
///
/// Anonymous classes are compiled to an all-digit nested segment
/// (`com.x.Outer$1`), which has no simple name; the empty string is
/// returned for those.
pub fn simple_name(binary_name: &str) -> &str {
    let after_pkg = match binary_name.rfind('.') {
        Some(i) => &binary_name[i + 1..],
        None => binary_name,
    };
    let last = match after_pkg.rfind('$') {
        Some(i) => &after_pkg[i + 1..],
        None => after_pkg,
    };
    if !last.is_empty() && last.bytes().all(|b| b.is_ascii_digit()) {
        ""
    } else {
        last
    }
}

/// Returns the package part of a binary name, or `""` for the unnamed
/// package.
pub fn package_name(binary_name: &str) -> &str {
    match binary_name.rfind('.') {
        Some(i) => &binary_name[..i],
        None => "",
    }
}

/// Builds the binary name of an array type over `component` with the given
/// number of dimensions.
pub fn array_name(component: &str, dims: usize) -> String {
    let mut name = String::with_capacity(component.len() + dims * ARRAY_SUFFIX.len());
    name.push_str(component);
    for _ in 0..dims {
        name.push_str(ARRAY_SUFFIX);
    }
    name
}

/// Strips one array dimension from a binary name. Returns `None` if the
/// name is not an array name.
pub fn array_component(binary_name: &str) -> Option<&str> {
    binary_name.strip_suffix(ARRAY_SUFFIX)
}

/// Counts the trailing array dimensions of a binary name.
pub fn array_dims(binary_name: &str) -> usize {
    let mut rest = binary_name;
    let mut dims = 0;
    while let Some(stripped) = rest.strip_suffix(ARRAY_SUFFIX) {
        rest = stripped;
        dims += 1;
    }
    dims
}

/// Whether this binary name denotes an array type.
pub fn is_array_name(binary_name: &str) -> bool {
    binary_name.ends_with(ARRAY_SUFFIX)
}
