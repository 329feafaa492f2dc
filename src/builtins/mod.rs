//! Built-in identifier table used to color keywords and well-known globals.
//!
//! This module provides:
//! - The keyword categories a stylesheet distinguishes
//! - A static table of reserved words, native globals, literal values,
//!   browser globals and common library entry points
//! - Nested property tables so dotted access like `Math.floor` resolves
//!   the member against its parent

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

/// Highlight category of a table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    /// Introduces a binding or construct (`var`, `function`, `class`)
    Defining,
    /// Control flow and operator keywords
    Reserved,
    /// Language built-ins (`Math`, `JSON`, `parseInt`)
    Native,
    /// Literal values (`true`, `null`, `undefined`)
    Value,
    /// Browser host globals (`window`, `document`, `console`)
    Client,
    /// Well-known library and module-system entry points
    Library,
}

impl KeywordCategory {
    pub fn css_class(&self) -> &'static str {
        match self {
            KeywordCategory::Defining => "defining-keyword",
            KeywordCategory::Reserved => "reserved-keyword",
            KeywordCategory::Native => "native-keyword",
            KeywordCategory::Value => "value-keyword",
            KeywordCategory::Client => "client-keyword",
            KeywordCategory::Library => "library-keyword",
        }
    }
}

/// A single table entry.
#[derive(Debug, Clone)]
pub struct KeywordEntry {
    pub category: KeywordCategory,
    properties: HashSet<&'static str>,
}

impl KeywordEntry {
    /// Whether `name` is a recognized member of this entry.
    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains(name)
    }
}

/// Read-only lookup from identifier to category.
#[derive(Debug)]
pub struct KeywordTable {
    entries: HashMap<&'static str, KeywordEntry>,
}

static TABLE: Lazy<KeywordTable> = Lazy::new(KeywordTable::build);

impl KeywordTable {
    /// The process-wide table, built on first use.
    pub fn global() -> &'static KeywordTable {
        &TABLE
    }

    pub fn lookup(&self, name: &str) -> Option<&KeywordEntry> {
        self.entries.get(name)
    }

    fn build() -> Self {
        let mut entries = HashMap::new();
        for &(category, names) in PLAIN {
            for &name in names {
                entries.insert(
                    name,
                    KeywordEntry {
                        category,
                        properties: HashSet::new(),
                    },
                );
            }
        }
        for &(name, category, properties) in WITH_PROPERTIES {
            entries.insert(
                name,
                KeywordEntry {
                    category,
                    properties: properties.iter().copied().collect(),
                },
            );
        }
        KeywordTable { entries }
    }
}

const PLAIN: &[(KeywordCategory, &[&str])] = &[
    (
        KeywordCategory::Defining,
        &[
            "var", "let", "const", "function", "class", "new", "delete", "this", "prototype",
        ],
    ),
    (
        KeywordCategory::Reserved,
        &[
            "if",
            "else",
            "for",
            "while",
            "do",
            "return",
            "break",
            "continue",
            "switch",
            "case",
            "default",
            "try",
            "catch",
            "finally",
            "throw",
            "typeof",
            "instanceof",
            "in",
            "of",
            "void",
            "with",
            "debugger",
            "yield",
            "async",
            "await",
            "import",
            "export",
            "extends",
            "super",
            "static",
            "enum",
            "implements",
            "interface",
            "package",
            "private",
            "protected",
            "public",
        ],
    ),
    (
        KeywordCategory::Native,
        &[
            "Boolean",
            "Function",
            "RegExp",
            "Error",
            "EvalError",
            "RangeError",
            "ReferenceError",
            "SyntaxError",
            "TypeError",
            "URIError",
            "Map",
            "Set",
            "WeakMap",
            "WeakSet",
            "Proxy",
            "arguments",
            "eval",
            "parseInt",
            "parseFloat",
            "isNaN",
            "isFinite",
            "encodeURI",
            "decodeURI",
            "encodeURIComponent",
            "decodeURIComponent",
            "escape",
            "unescape",
        ],
    ),
    (
        KeywordCategory::Value,
        &["true", "false", "null", "undefined", "NaN", "Infinity"],
    ),
    (
        KeywordCategory::Client,
        &[
            "alert",
            "confirm",
            "prompt",
            "setTimeout",
            "setInterval",
            "clearTimeout",
            "clearInterval",
            "requestAnimationFrame",
            "fetch",
            "XMLHttpRequest",
            "Worker",
            "postMessage",
            "self",
            "screen",
            "history",
            "Image",
            "Event",
            "Node",
            "Element",
            "HTMLElement",
        ],
    ),
    (
        KeywordCategory::Library,
        &["_", "Backbone", "angular", "React", "ReactDOM", "define", "exports"],
    ),
];

const WITH_PROPERTIES: &[(&str, KeywordCategory, &[&str])] = &[
    (
        "Math",
        KeywordCategory::Native,
        &[
            "E", "LN2", "LN10", "LOG2E", "LOG10E", "PI", "SQRT1_2", "SQRT2", "abs", "acos",
            "asin", "atan", "atan2", "cbrt", "ceil", "cos", "exp", "floor", "hypot", "log",
            "max", "min", "pow", "random", "round", "sign", "sin", "sqrt", "tan", "trunc",
        ],
    ),
    ("JSON", KeywordCategory::Native, &["parse", "stringify"]),
    (
        "Object",
        KeywordCategory::Native,
        &[
            "assign",
            "create",
            "defineProperty",
            "defineProperties",
            "entries",
            "freeze",
            "getOwnPropertyNames",
            "getPrototypeOf",
            "keys",
            "values",
        ],
    ),
    ("Array", KeywordCategory::Native, &["from", "isArray", "of"]),
    ("String", KeywordCategory::Native, &["fromCharCode", "raw"]),
    (
        "Number",
        KeywordCategory::Native,
        &[
            "EPSILON",
            "MAX_VALUE",
            "MIN_VALUE",
            "MAX_SAFE_INTEGER",
            "MIN_SAFE_INTEGER",
            "NaN",
            "NEGATIVE_INFINITY",
            "POSITIVE_INFINITY",
            "isFinite",
            "isInteger",
            "isNaN",
            "parseFloat",
            "parseInt",
        ],
    ),
    ("Date", KeywordCategory::Native, &["now", "parse", "UTC"]),
    (
        "Promise",
        KeywordCategory::Native,
        &["all", "allSettled", "any", "race", "reject", "resolve"],
    ),
    (
        "Symbol",
        KeywordCategory::Native,
        &["for", "iterator", "asyncIterator", "hasInstance", "toPrimitive"],
    ),
    (
        "Reflect",
        KeywordCategory::Native,
        &["apply", "construct", "get", "has", "ownKeys", "set"],
    ),
    (
        "window",
        KeywordCategory::Client,
        &[
            "addEventListener",
            "removeEventListener",
            "open",
            "close",
            "scrollTo",
            "innerWidth",
            "innerHeight",
            "onload",
            "location",
            "document",
            "navigator",
        ],
    ),
    (
        "document",
        KeywordCategory::Client,
        &[
            "body",
            "head",
            "title",
            "cookie",
            "createElement",
            "createTextNode",
            "getElementById",
            "getElementsByClassName",
            "getElementsByTagName",
            "querySelector",
            "querySelectorAll",
            "addEventListener",
            "write",
        ],
    ),
    (
        "console",
        KeywordCategory::Client,
        &[
            "assert", "clear", "debug", "dir", "error", "group", "groupEnd", "info", "log",
            "table", "time", "timeEnd", "trace", "warn",
        ],
    ),
    (
        "navigator",
        KeywordCategory::Client,
        &["userAgent", "language", "platform", "onLine", "geolocation"],
    ),
    (
        "location",
        KeywordCategory::Client,
        &["hash", "host", "hostname", "href", "pathname", "protocol", "search", "reload"],
    ),
    (
        "localStorage",
        KeywordCategory::Client,
        &["getItem", "setItem", "removeItem", "clear", "key", "length"],
    ),
    (
        "sessionStorage",
        KeywordCategory::Client,
        &["getItem", "setItem", "removeItem", "clear", "key", "length"],
    ),
    (
        "$",
        KeywordCategory::Library,
        &[
            "ajax", "each", "extend", "fn", "get", "getJSON", "grep", "inArray", "isArray",
            "map", "noConflict", "post", "trim", "when", "Deferred",
        ],
    ),
    (
        "jQuery",
        KeywordCategory::Library,
        &[
            "ajax", "each", "extend", "fn", "get", "getJSON", "grep", "inArray", "isArray",
            "map", "noConflict", "post", "trim", "when", "Deferred",
        ],
    ),
    ("module", KeywordCategory::Library, &["exports", "id", "require"]),
    ("require", KeywordCategory::Library, &["cache", "resolve"]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        let table = KeywordTable::global();
        let category = |name: &str| table.lookup(name).map(|e| e.category);
        assert_eq!(category("var"), Some(KeywordCategory::Defining));
        assert_eq!(category("return"), Some(KeywordCategory::Reserved));
        assert_eq!(category("Math"), Some(KeywordCategory::Native));
        assert_eq!(category("undefined"), Some(KeywordCategory::Value));
        assert_eq!(category("document"), Some(KeywordCategory::Client));
        assert_eq!(category("jQuery"), Some(KeywordCategory::Library));
        assert_eq!(category("fooBarBaz"), None);
    }

    #[test]
    fn test_prototype_names_are_not_entries() {
        let table = KeywordTable::global();
        assert!(table.lookup("toString").is_none());
        assert!(table.lookup("hasOwnProperty").is_none());
        assert!(table.lookup("__proto__").is_none());
        assert!(table.lookup("constructor").is_none());
    }

    #[test]
    fn test_nested_properties() {
        let math = KeywordTable::global().lookup("Math").unwrap();
        assert!(math.has_property("floor"));
        assert!(math.has_property("PI"));
        assert!(!math.has_property("parse"));

        let var = KeywordTable::global().lookup("var").unwrap();
        assert!(!var.has_property("floor"));
    }

    #[test]
    fn test_keyword_lookup_is_case_sensitive() {
        let table = KeywordTable::global();
        assert!(table.lookup("Var").is_none());
        assert!(table.lookup("math").is_none());
        assert!(table.lookup("Math").is_some());
    }
}
