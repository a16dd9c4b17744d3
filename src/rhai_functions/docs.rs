use serde::Serialize;

use super::registry::{NativeFunction, FUNCTIONS};

#[derive(Debug, Serialize)]
pub struct FunctionDoc {
    pub name: &'static str,
    pub params: Vec<ParamDoc>,
    pub returns: &'static str,
    pub summary: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ParamDoc {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub ty: &'static str,
}

impl From<&NativeFunction> for FunctionDoc {
    fn from(function: &NativeFunction) -> Self {
        Self {
            name: function.name,
            params: function
                .params
                .iter()
                .map(|&(name, ty)| ParamDoc {
                    name,
                    ty: ty.name(),
                })
                .collect(),
            returns: function.returns.name(),
            summary: function.summary,
        }
    }
}

/// Function reference grouped by namespace, one signature per line.
pub fn generate_help_text(namespace: &str) -> String {
    let signatures: Vec<String> = FUNCTIONS.iter().map(NativeFunction::signature).collect();
    let width = signatures.iter().map(String::len).max().unwrap_or(0);

    let mut out = format!(
        "Available string functions (call as {0}::Name(...) or Name(...)):\n\n",
        namespace
    );
    for (function, signature) in FUNCTIONS.iter().zip(&signatures) {
        out.push_str(&format!(
            "{:<width$}  {}\n",
            signature,
            function.summary,
            width = width
        ));
    }
    out
}

pub fn generate_help_json() -> serde_json::Result<String> {
    let docs: Vec<FunctionDoc> = FUNCTIONS.iter().map(FunctionDoc::from).collect();
    serde_json::to_string_pretty(&docs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_text_lists_every_function() {
        let help = generate_help_text("StringUtils");
        assert!(help.starts_with("Available string functions (call as StringUtils::Name"));
        for function in FUNCTIONS {
            assert!(help.contains(function.name), "missing {}", function.name);
        }
        assert!(help.contains("Int SearchIndex(String source, String needle, Int startIndex)"));
        assert!(help.contains("String[] Split(String source, String delimiter)"));
    }

    #[test]
    fn test_help_json_shape() {
        let json: serde_json::Value = serde_json::from_str(&generate_help_json().unwrap()).unwrap();
        let entries = json.as_array().unwrap();
        assert_eq!(entries.len(), FUNCTIONS.len());

        let join = entries.iter().find(|e| e["name"] == "Join").unwrap();
        assert_eq!(join["returns"], "String");
        assert_eq!(join["params"][0]["type"], "String[]");
        assert_eq!(join["params"][1]["name"], "delimiter");
    }
}
