//! Binding descriptor: what the target library looks like.
//!
//! The descriptor tells the lowering which type parameters each generic type
//! takes, which arguments each constructor and function takes (and in which
//! order), which headers to include and which prelude text to paste ahead of
//! the generated program.

use crate::errors::SchemaError;
use indexmap::{IndexMap, IndexSet};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

pub type NameTable = IndexMap<String, Vec<String>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LibInfo {
    pub typevar_names: NameTable,
    pub create_arg_names: NameTable,
    pub arg_names: NameTable,
    pub includes: IndexSet<String>,
    pub lib: String,
}

impl LibInfo {
    pub fn builder() -> LibInfoBuilder {
        LibInfoBuilder::default()
    }

    /// Reads a descriptor object. Every one of the five fields is required.
    pub fn from_json(value: &Value) -> Result<Self, SchemaError> {
        let obj = value.as_object().ok_or_else(|| SchemaError::Malformed {
            field: "descriptor",
            reason: "expected an object".to_string(),
        })?;

        fn field<T: DeserializeOwned>(
            obj: &serde_json::Map<String, Value>,
            name: &'static str,
        ) -> Result<T, SchemaError> {
            match obj.get(name) {
                None | Some(Value::Null) => Err(SchemaError::MissingField(name)),
                Some(value) => {
                    serde_json::from_value(value.clone()).map_err(|e| SchemaError::Malformed {
                        field: name,
                        reason: e.to_string(),
                    })
                }
            }
        }

        let typevar_names = field(obj, "typevarNames")?;
        let create_arg_names = field(obj, "createArgNames")?;
        let arg_names = field(obj, "argNames")?;
        let includes: Vec<String> = field(obj, "includes")?;
        let lib = field(obj, "lib")?;

        Ok(Self {
            typevar_names,
            create_arg_names,
            arg_names,
            includes: includes.into_iter().collect(),
            lib,
        })
    }

    pub fn from_json_str(text: &str) -> Result<Self, SchemaError> {
        let value: Value = serde_json::from_str(text).map_err(|e| SchemaError::Malformed {
            field: "descriptor",
            reason: e.to_string(),
        })?;
        Self::from_json(&value)
    }

    pub fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }

    pub fn typevars_of(&self, ty: &str) -> Option<&[String]> {
        self.typevar_names.get(ty).map(Vec::as_slice)
    }

    pub fn create_args_of(&self, ty: &str) -> Option<&[String]> {
        self.create_arg_names.get(ty).map(Vec::as_slice)
    }

    pub fn args_of(&self, func: &str) -> Option<&[String]> {
        self.arg_names.get(func).map(Vec::as_slice)
    }
}

#[derive(Debug, Default)]
pub struct LibInfoBuilder {
    info: LibInfo,
}

fn names<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items.into_iter().map(Into::into).collect()
}

impl LibInfoBuilder {
    pub fn typevars<I, S>(mut self, ty: impl Into<String>, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.info.typevar_names.insert(ty.into(), names(params));
        self
    }

    pub fn create_args<I, S>(mut self, ty: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.info.create_arg_names.insert(ty.into(), names(args));
        self
    }

    pub fn function<I, S>(mut self, func: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.info.arg_names.insert(func.into(), names(args));
        self
    }

    pub fn include(mut self, header: impl Into<String>) -> Self {
        self.info.includes.insert(header.into());
        self
    }

    pub fn lib(mut self, prelude: impl Into<String>) -> Self {
        self.info.lib = prelude.into();
        self
    }

    pub fn build(self) -> LibInfo {
        self.info
    }
}
