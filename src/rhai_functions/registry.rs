//! Declarative table of every script-visible function.
//!
//! Each entry names the function, its typed parameters, its return type and
//! a plain function pointer doing the work. [`build_module`] is the only code
//! that talks to Rhai's registration API.

use rhai::{Dynamic, FuncRegistration, Module, RhaiFunc};
use std::sync::Arc;

use super::bridge::{text_from_script, ScriptType, ScriptValue};
use crate::config::HostConfig;
use crate::strings;

use ScriptType::{Bool, Int, IntArray, Text, TextArray};
use ScriptValue as V;

pub const PLUGIN_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Arguments of one call, already converted and checked against the
/// declared parameter types.
pub struct Call<'a> {
    pub host: &'a HostConfig,
    args: &'a [ScriptValue],
}

impl<'a> Call<'a> {
    pub fn new(host: &'a HostConfig, args: &'a [ScriptValue]) -> Self {
        Self { host, args }
    }

    pub fn text(&self, index: usize) -> &[u8] {
        match self.args.get(index) {
            Some(V::Text(bytes)) => bytes,
            _ => &[],
        }
    }

    pub fn int(&self, index: usize) -> i64 {
        match self.args.get(index) {
            Some(V::Int(n)) => *n,
            _ => 0,
        }
    }

    pub fn texts(&self, index: usize) -> &[Option<Vec<u8>>] {
        match self.args.get(index) {
            Some(V::TextArray(parts)) => parts,
            _ => &[],
        }
    }

    pub fn ints(&self, index: usize) -> &[i64] {
        match self.args.get(index) {
            Some(V::IntArray(values)) => values,
            _ => &[],
        }
    }
}

pub struct NativeFunction {
    pub name: &'static str,
    pub params: &'static [(&'static str, ScriptType)],
    pub returns: ScriptType,
    pub summary: &'static str,
    pub call: fn(&Call<'_>) -> ScriptValue,
}

impl NativeFunction {
    pub fn signature(&self) -> String {
        let params: Vec<String> = self
            .params
            .iter()
            .map(|(name, ty)| format!("{} {}", ty.name(), name))
            .collect();
        format!("{} {}({})", self.returns.name(), self.name, params.join(", "))
    }
}

pub fn version_info(host: &HostConfig) -> String {
    format!(
        "Plugin:{},Game:{},Runtime:{}",
        PLUGIN_VERSION, host.game_version, host.runtime_version
    )
}

fn text(bytes: Vec<u8>) -> ScriptValue {
    V::Text(bytes)
}

fn texts(parts: Vec<Vec<u8>>) -> ScriptValue {
    V::TextArray(parts.into_iter().map(Some).collect())
}

pub static FUNCTIONS: &[NativeFunction] = &[
    // metadata
    NativeFunction {
        name: "PluginVersion",
        params: &[],
        returns: Text,
        summary: "Version of this string library",
        call: |_| text(text_from_script(PLUGIN_VERSION)),
    },
    NativeFunction {
        name: "GameVersion",
        params: &[],
        returns: Text,
        summary: "Game version the host reports",
        call: |c| text(text_from_script(&c.host.game_version)),
    },
    NativeFunction {
        name: "RuntimeVersion",
        params: &[],
        returns: Text,
        summary: "Script runtime version the host reports",
        call: |c| text(text_from_script(&c.host.runtime_version)),
    },
    NativeFunction {
        name: "VersionInfo",
        params: &[],
        returns: Text,
        summary: "Plugin:<v>,Game:<v>,Runtime:<v>",
        call: |c| text(text_from_script(&version_info(c.host))),
    },
    // queries
    NativeFunction {
        name: "Echo",
        params: &[("source", Text)],
        returns: Text,
        summary: "Return the argument unchanged",
        call: |c| text(strings::echo(c.text(0))),
    },
    NativeFunction {
        name: "Count",
        params: &[("source", Text)],
        returns: Int,
        summary: "Number of characters",
        call: |c| V::Int(strings::length(c.text(0))),
    },
    NativeFunction {
        name: "IsEmpty",
        params: &[("source", Text)],
        returns: Bool,
        summary: "True for the empty string",
        call: |c| V::Bool(strings::is_empty(c.text(0))),
    },
    NativeFunction {
        name: "Compare",
        params: &[("left", Text), ("right", Text)],
        returns: Int,
        summary: "-1, 0 or 1, ignoring case",
        call: |c| V::Int(strings::compare(c.text(0), c.text(1))),
    },
    NativeFunction {
        name: "Equals",
        params: &[("left", Text), ("right", Text)],
        returns: Bool,
        summary: "Equality ignoring case",
        call: |c| V::Bool(strings::equals(c.text(0), c.text(1))),
    },
    NativeFunction {
        name: "Search",
        params: &[("source", Text), ("needle", Text)],
        returns: Int,
        summary: "Index of first match or -1",
        call: |c| V::Int(strings::search(c.text(0), c.text(1))),
    },
    NativeFunction {
        name: "SearchReverse",
        params: &[("source", Text), ("needle", Text)],
        returns: Int,
        summary: "Index of last match or -1",
        call: |c| V::Int(strings::search_reverse(c.text(0), c.text(1))),
    },
    NativeFunction {
        name: "SearchIndex",
        params: &[("source", Text), ("needle", Text), ("startIndex", Int)],
        returns: Int,
        summary: "Index of first match at or after startIndex or -1",
        call: |c| V::Int(strings::search_index(c.text(0), c.text(1), c.int(2))),
    },
    NativeFunction {
        name: "SearchIndexReverse",
        params: &[("source", Text), ("needle", Text), ("startIndex", Int)],
        returns: Int,
        summary: "Index of last match at or before startIndex or -1",
        call: |c| V::Int(strings::search_index_reverse(c.text(0), c.text(1), c.int(2))),
    },
    NativeFunction {
        name: "Contains",
        params: &[("source", Text), ("needle", Text)],
        returns: Bool,
        summary: "True if needle occurs, ignoring case",
        call: |c| V::Bool(strings::contains(c.text(0), c.text(1))),
    },
    NativeFunction {
        name: "StartsWith",
        params: &[("source", Text), ("prefix", Text)],
        returns: Bool,
        summary: "Prefix test ignoring case",
        call: |c| V::Bool(strings::starts_with(c.text(0), c.text(1))),
    },
    NativeFunction {
        name: "EndsWith",
        params: &[("source", Text), ("suffix", Text)],
        returns: Bool,
        summary: "Suffix test ignoring case",
        call: |c| V::Bool(strings::ends_with(c.text(0), c.text(1))),
    },
    // transforms
    NativeFunction {
        name: "Replace",
        params: &[("source", Text), ("needle", Text), ("replacement", Text)],
        returns: Text,
        summary: "Replace the first match",
        call: |c| text(strings::replace(c.text(0), c.text(1), c.text(2))),
    },
    NativeFunction {
        name: "ReplaceAll",
        params: &[("source", Text), ("needle", Text), ("replacement", Text)],
        returns: Text,
        summary: "Replace every match",
        call: |c| text(strings::replace_all(c.text(0), c.text(1), c.text(2))),
    },
    NativeFunction {
        name: "ReplaceIndex",
        params: &[
            ("source", Text),
            ("startIndex", Int),
            ("count", Int),
            ("replacement", Text),
        ],
        returns: Text,
        summary: "Replace count characters at startIndex",
        call: |c| text(strings::replace_index(c.text(0), c.int(1), c.int(2), c.text(3))),
    },
    NativeFunction {
        name: "Substring",
        params: &[("source", Text), ("startIndex", Int), ("count", Int)],
        returns: Text,
        summary: "Up to count characters from startIndex",
        call: |c| text(strings::substring(c.text(0), c.int(1), c.int(2))),
    },
    NativeFunction {
        name: "CharAt",
        params: &[("source", Text), ("startIndex", Int)],
        returns: Text,
        summary: "Character at startIndex",
        call: |c| text(strings::char_at(c.text(0), c.int(1))),
    },
    NativeFunction {
        name: "OrdinalAt",
        params: &[("source", Text), ("startIndex", Int)],
        returns: Int,
        summary: "Character code at startIndex or -1",
        call: |c| V::Int(strings::ordinal_at(c.text(0), c.int(1))),
    },
    NativeFunction {
        name: "Remove",
        params: &[("source", Text), ("target", Text)],
        returns: Text,
        summary: "Remove the first match",
        call: |c| text(strings::remove(c.text(0), c.text(1))),
    },
    NativeFunction {
        name: "RemoveAll",
        params: &[("source", Text), ("target", Text)],
        returns: Text,
        summary: "Remove every match",
        call: |c| text(strings::remove_all(c.text(0), c.text(1))),
    },
    NativeFunction {
        name: "Reverse",
        params: &[("source", Text)],
        returns: Text,
        summary: "Characters in reverse order",
        call: |c| text(strings::reverse(c.text(0))),
    },
    NativeFunction {
        name: "Repeat",
        params: &[("source", Text), ("count", Int)],
        returns: Text,
        summary: "source repeated count times (empty past 16 MiB)",
        call: |c| text(strings::repeat(c.text(0), c.int(1))),
    },
    NativeFunction {
        name: "ToChar",
        params: &[("ordinal", Int)],
        returns: Text,
        summary: "One-character string for codes 0-255",
        call: |c| text(strings::to_char(c.int(0))),
    },
    NativeFunction {
        name: "ToTitleCase",
        params: &[("source", Text)],
        returns: Text,
        summary: "Capitalize the first letter of each word",
        call: |c| text(strings::to_title_case(c.text(0))),
    },
    NativeFunction {
        name: "ToOrdinal",
        params: &[("source", Text)],
        returns: Int,
        summary: "Code of the first character or -1",
        call: |c| V::Int(strings::to_ordinal(c.text(0))),
    },
    NativeFunction {
        name: "TrimStart",
        params: &[("source", Text)],
        returns: Text,
        summary: "Strip leading space, tab, CR and LF",
        call: |c| text(strings::trim_start(c.text(0))),
    },
    NativeFunction {
        name: "TrimEnd",
        params: &[("source", Text)],
        returns: Text,
        summary: "Strip trailing space, tab, CR and LF",
        call: |c| text(strings::trim_end(c.text(0))),
    },
    NativeFunction {
        name: "TrimBoth",
        params: &[("source", Text)],
        returns: Text,
        summary: "Strip space, tab, CR and LF from both ends",
        call: |c| text(strings::trim_both(c.text(0))),
    },
    // classification
    NativeFunction {
        name: "IsAlpha",
        params: &[("source", Text)],
        returns: Bool,
        summary: "Only letters",
        call: |c| V::Bool(strings::is_alpha(c.text(0))),
    },
    NativeFunction {
        name: "IsDigit",
        params: &[("source", Text)],
        returns: Bool,
        summary: "Only decimal digits",
        call: |c| V::Bool(strings::is_digit(c.text(0))),
    },
    NativeFunction {
        name: "IsHex",
        params: &[("source", Text)],
        returns: Bool,
        summary: "Only hexadecimal digits",
        call: |c| V::Bool(strings::is_hex(c.text(0))),
    },
    NativeFunction {
        name: "IsAlphaNumeric",
        params: &[("source", Text)],
        returns: Bool,
        summary: "Only letters and digits",
        call: |c| V::Bool(strings::is_alpha_numeric(c.text(0))),
    },
    NativeFunction {
        name: "IsWhitespace",
        params: &[("source", Text)],
        returns: Bool,
        summary: "Only whitespace",
        call: |c| V::Bool(strings::is_whitespace(c.text(0))),
    },
    NativeFunction {
        name: "IsPunctuation",
        params: &[("source", Text)],
        returns: Bool,
        summary: "Only punctuation",
        call: |c| V::Bool(strings::is_punctuation(c.text(0))),
    },
    NativeFunction {
        name: "IsASCII",
        params: &[("source", Text)],
        returns: Bool,
        summary: "Only codes 0-127",
        call: |c| V::Bool(strings::is_ascii(c.text(0))),
    },
    NativeFunction {
        name: "IsControl",
        params: &[("source", Text)],
        returns: Bool,
        summary: "Only control characters",
        call: |c| V::Bool(strings::is_control(c.text(0))),
    },
    NativeFunction {
        name: "IsPrintable",
        params: &[("source", Text)],
        returns: Bool,
        summary: "Only printable characters, space included",
        call: |c| V::Bool(strings::is_printable(c.text(0))),
    },
    NativeFunction {
        name: "IsGraph",
        params: &[("source", Text)],
        returns: Bool,
        summary: "Only visible characters",
        call: |c| V::Bool(strings::is_graph(c.text(0))),
    },
    // collections
    NativeFunction {
        name: "Join",
        params: &[("parts", TextArray), ("delimiter", Text)],
        returns: Text,
        summary: "Join strings with a delimiter, skipping non-strings",
        call: |c| text(strings::join(c.texts(0), c.text(1))),
    },
    NativeFunction {
        name: "Split",
        params: &[("source", Text), ("delimiter", Text)],
        returns: TextArray,
        summary: "Split on a delimiter (empty: per character)",
        call: |c| texts(strings::split(c.text(0), c.text(1))),
    },
    NativeFunction {
        name: "OrdinalJoin",
        params: &[("ordinals", IntArray)],
        returns: Text,
        summary: "String from character codes, skipping invalid ones",
        call: |c| text(strings::ordinal_join(c.ints(0))),
    },
    NativeFunction {
        name: "OrdinalSplit",
        params: &[("source", Text)],
        returns: IntArray,
        summary: "Character codes of a string",
        call: |c| V::IntArray(strings::ordinal_split(c.text(0))),
    },
    NativeFunction {
        name: "Sort",
        params: &[("parts", TextArray)],
        returns: TextArray,
        summary: "Sort strings ignoring case",
        call: |c| {
            let parts: Vec<&[u8]> = c
                .texts(0)
                .iter()
                .map(|part| part.as_deref().unwrap_or_default())
                .collect();
            texts(strings::sort(parts).into_iter().map(<[u8]>::to_vec).collect())
        },
    },
];

/// Installs every table entry into a fresh module.
///
/// Arguments are converted according to the declared parameter types before
/// the entry runs; the entry's result is converted back into a Rhai value.
pub fn build_module(host: &HostConfig) -> Module {
    let mut module = Module::new();
    for function in FUNCTIONS {
        let host = host.clone();
        let arg_types: Vec<_> = function.params.iter().map(|(_, ty)| ty.type_id()).collect();
        FuncRegistration::new(function.name)
            .in_internal_namespace()
            .set_into_module_raw(
                &mut module,
                arg_types,
                RhaiFunc::Method {
                    func: Arc::new(move |_ctx, args: &mut [&mut Dynamic]| {
                        let values = function
                            .params
                            .iter()
                            .zip(args.iter())
                            .map(|((_, ty), arg)| ty.extract(arg))
                            .collect::<Result<Vec<_>, _>>()?;
                        Ok((function.call)(&Call::new(&host, &values)).into_dynamic())
                    }),
                    has_context: false,
                    is_pure: true,
                    is_volatile: false,
                },
            );
    }
    module
}
