use anyhow::{anyhow, Context, Result};
use blockir_core::{codec, Block, LibInfo};
use blockir_emit::{Transpiler, TranspilerConfig};
use serde_json::Value;
use tracing::debug;

fn decode_root(block: &Value) -> Result<Block> {
    codec::decode(block)
        .context("Failed to decode IR tree")?
        .ok_or_else(|| anyhow!("IR tree is null"))
}

fn transpiler(descriptor: &Value, config: TranspilerConfig) -> Result<Transpiler> {
    let info = LibInfo::from_json(descriptor).context("Failed to read binding descriptor")?;
    Ok(Transpiler::with_config(info, config))
}

/// Lowers a JSON-encoded tree without wrapping it in a translation unit.
pub fn transpile_json(block: &Value, descriptor: &Value) -> Result<String> {
    let root = decode_root(block)?;
    let output = transpiler(descriptor, TranspilerConfig::default())?
        .transpile(&root)
        .with_context(|| format!("Failed to transpile {}", root.kind()))?;
    Ok(output)
}

/// Bundles a JSON-encoded tree into a complete C++ translation unit.
pub fn bundle_json(block: &Value, descriptor: &Value) -> Result<String> {
    bundle_json_with_config(block, descriptor, TranspilerConfig::default())
}

pub fn bundle_json_with_config(
    block: &Value,
    descriptor: &Value,
    config: TranspilerConfig,
) -> Result<String> {
    let root = decode_root(block)?;
    let transpiler = transpiler(descriptor, config)?;
    debug!(root = root.kind(), "bundling decoded tree");
    transpiler
        .bundle(&root)
        .with_context(|| format!("Failed to bundle {}", root.kind()))
}

/// Same as [`bundle_json`], reading both inputs from JSON text.
pub fn bundle_str(block: &str, descriptor: &str) -> Result<String> {
    let block: Value = serde_json::from_str(block).context("IR tree is not valid JSON")?;
    let descriptor: Value =
        serde_json::from_str(descriptor).context("Binding descriptor is not valid JSON")?;
    bundle_json(&block, &descriptor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn descriptor() -> Value {
        json!({
            "typevarNames": {},
            "createArgNames": {},
            "argNames": { "f": ["a0", "a1"] },
            "includes": ["iostream"],
            "lib": "P\n",
        })
    }

    #[test]
    fn test_transpile_json() {
        let block = json!({ "_type": "Do", "expr": { "_type": "Identifier", "id": "x" } });
        assert_eq!(transpile_json(&block, &descriptor()).unwrap(), "x;\n");
    }

    #[test]
    fn test_null_tree_is_rejected() {
        let err = bundle_json(&Value::Null, &descriptor()).unwrap_err();
        assert_eq!(err.to_string(), "IR tree is null");
    }

    #[test]
    fn test_errors_name_the_failing_input() {
        let block = json!({ "_type": "Goto" });
        let err = bundle_json(&block, &descriptor()).unwrap_err();
        assert_eq!(err.to_string(), "Failed to decode IR tree");

        let block = json!({ "_type": "Break" });
        let mut descriptor = descriptor();
        descriptor.as_object_mut().unwrap().remove("lib");
        let err = bundle_json(&block, &descriptor).unwrap_err();
        assert_eq!(err.to_string(), "Failed to read binding descriptor");
        assert_eq!(err.root_cause().to_string(), "No lib argument");
    }
}
