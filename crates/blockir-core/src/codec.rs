//! Canonical JSON form of the IR.
//!
//! Every node is one object whose `_type` field names its kind, followed by
//! the node's fields. Ordered children are always arrays so the order survives
//! any JSON implementation. `null` stands for an absent node.
//!
//! Two legacy shapes are still read, never written: the `Loop` kind (now
//! `Foreach`), and argument/typevar lists written as objects keyed by name,
//! which are upgraded to arrays in document order.

use crate::{
    block::{Block, CategoryError},
    errors::FormatError,
    expressions::{Argument, Call, Create, Expr},
    function::{Declaration, Func},
    statements::{Assign, Branch, Case, DefaultCase, Do, Foreach, Return, Stmt, Suite, While},
    types::{PolymorphicType, Type, TypeArgument, TypeIdentifier},
    values::{Identifier, Num, Str},
};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{json, Map, Value};
use tracing::debug;

/// Name of the discriminator field.
pub const TAG: &str = "_type";

/// Decodes a wire value. `null` decodes to `None`.
pub fn decode(value: &Value) -> Result<Option<Block>, FormatError> {
    if value.is_null() {
        return Ok(None);
    }
    decode_block(value).map(Some)
}

pub fn encode(block: &Block) -> Value {
    match block {
        Block::TypeIdentifier(b) => b.encode(),
        Block::TypeArgument(b) => b.encode(),
        Block::PolymorphicType(b) => b.encode(),
        Block::Num(b) => b.encode(),
        Block::Str(b) => b.encode(),
        Block::Identifier(b) => b.encode(),
        Block::Declaration(b) => b.encode(),
        Block::Func(b) => b.encode(),
        Block::Argument(b) => b.encode(),
        Block::Create(b) => b.encode(),
        Block::Call(b) => b.encode(),
        Block::Assign(b) => b.encode(),
        Block::Do(b) => b.encode(),
        Block::Foreach(b) => b.encode(),
        Block::While(b) => b.encode(),
        Block::Branch(b) => b.encode(),
        Block::Case(b) => b.encode(),
        Block::Default(b) => b.encode(),
        Block::Return(b) => b.encode(),
        Block::Break => Stmt::Break.encode(),
        Block::Continue => Stmt::Continue.encode(),
        Block::Suite(b) => b.encode(),
    }
}

pub fn encode_opt(block: Option<&Block>) -> Value {
    block.map_or(Value::Null, encode)
}

pub fn to_json_string(block: &Block) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&encode(block))
}

pub fn from_json_str(text: &str) -> Result<Option<Block>, FormatError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| FormatError::Syntax(e.to_string()))?;
    decode(&value)
}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        encode(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Block {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        decode(&value)
            .map_err(de::Error::custom)?
            .ok_or_else(|| de::Error::custom("Invalid JSON: expected a node, found null"))
    }
}

fn kind_of(tag: &str) -> Option<&'static str> {
    Some(match tag {
        "TypeIdentifier" => "TypeIdentifier",
        "TypeArgument" => "TypeArgument",
        "PolymorphicType" => "PolymorphicType",
        "Num" => "Num",
        "Str" => "Str",
        "Identifier" => "Identifier",
        "Declaration" => "Declaration",
        "Func" => "Func",
        "Argument" => "Argument",
        "Create" => "Create",
        "Call" => "Call",
        "Assign" => "Assign",
        "Do" => "Do",
        "Foreach" | "Loop" => "Foreach",
        "While" => "While",
        "Branch" => "Branch",
        "Case" => "Case",
        "Default" => "Default",
        "Return" => "Return",
        "Break" => "Break",
        "Continue" => "Continue",
        "Suite" => "Suite",
        _ => return None,
    })
}

fn decode_block(value: &Value) -> Result<Block, FormatError> {
    let unknown = || FormatError::UnknownKind {
        value: value.clone(),
    };
    let obj = value.as_object().ok_or_else(unknown)?;
    let kind = obj
        .get(TAG)
        .and_then(Value::as_str)
        .and_then(kind_of)
        .ok_or_else(unknown)?;
    let node = Fields {
        kind,
        obj,
        raw: value,
    };

    let block: Block = match kind {
        "TypeIdentifier" => TypeIdentifier::new(node.string("id")?).into(),
        "TypeArgument" => {
            TypeArgument::new(node.string("name")?, node.child::<Type>("type")?).into()
        }
        "PolymorphicType" => {
            let ty = PolymorphicType::new(
                node.child::<TypeIdentifier>("id")?,
                node.typevars("typevars")?,
            );
            if let Some(name) = ty.duplicate_typevar() {
                return Err(FormatError::DuplicateName {
                    kind,
                    name: name.to_string(),
                    value: value.clone(),
                });
            }
            ty.into()
        }
        "Num" => Num::new(node.string("value")?, node.bool_or("isFloat", false)?).into(),
        "Str" => Str::new(node.string("value")?).into(),
        "Identifier" => Identifier::new(node.string("id")?).into(),
        "Declaration" => Declaration::new(
            node.child::<Identifier>("arg")?,
            node.child::<Type>("type")?,
        )
        .into(),
        "Func" => Func::new(
            node.list::<Declaration>("decls")?,
            node.child::<Type>("returnType")?,
            node.child::<Stmt>("body")?,
        )
        .into(),
        "Argument" => Argument::new(
            node.child::<Identifier>("name")?,
            node.child::<Expr>("value")?,
        )
        .into(),
        "Create" => Create::new(node.child::<Type>("type")?, node.args("args")?).into(),
        "Call" => Call::new(node.child::<Identifier>("func")?, node.args("args")?).into(),
        "Assign" => Assign::new(
            node.child::<Identifier>("lhs")?,
            node.bool("isDefine")?,
            node.child::<Expr>("rhs")?,
        )
        .into(),
        "Do" => Do::new(node.child::<Expr>("expr")?).into(),
        "Foreach" => Foreach::new(
            node.child::<Identifier>("id")?,
            node.child::<Expr>("iterable")?,
            node.child::<Stmt>("body")?,
        )
        .into(),
        "While" => {
            While::new(node.child::<Expr>("cond")?, node.child::<Stmt>("body")?).into()
        }
        "Branch" => Branch::new(
            node.list::<Case>("cases")?,
            node.opt_child::<DefaultCase>("default")?,
        )
        .into(),
        "Case" => Case::new(node.child::<Expr>("cond")?, node.child::<Stmt>("body")?).into(),
        "Default" => DefaultCase::new(node.child::<Stmt>("body")?).into(),
        "Return" => Return::new(node.opt_child::<Expr>("value")?).into(),
        "Break" => Block::Break,
        "Continue" => Block::Continue,
        "Suite" => Suite::new(node.list::<Stmt>("stmts")?).into(),
        _ => return Err(unknown()),
    };
    Ok(block)
}

/// Decodes `value` and narrows it to the node category `T`.
fn decode_as<T>(value: &Value) -> Result<T, FormatError>
where
    T: TryFrom<Block, Error = CategoryError>,
{
    let block = decode_block(value)?;
    T::try_from(block).map_err(|e| FormatError::WrongCategory {
        expected: e.expected,
        found: e.found,
        value: value.clone(),
    })
}

/// Field accessors over one wire object, reporting errors against it.
struct Fields<'a> {
    kind: &'static str,
    obj: &'a Map<String, Value>,
    raw: &'a Value,
}

impl<'a> Fields<'a> {
    fn get(&self, field: &'static str) -> Result<&'a Value, FormatError> {
        match self.obj.get(field) {
            Some(value) if !value.is_null() => Ok(value),
            _ => Err(FormatError::MissingField {
                kind: self.kind,
                field,
                value: self.raw.clone(),
            }),
        }
    }

    fn invalid(&self, field: &'static str, expected: &'static str) -> FormatError {
        FormatError::InvalidField {
            kind: self.kind,
            field,
            expected,
            value: self.raw.clone(),
        }
    }

    fn string(&self, field: &'static str) -> Result<String, FormatError> {
        self.get(field)?
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| self.invalid(field, "a string"))
    }

    fn bool(&self, field: &'static str) -> Result<bool, FormatError> {
        self.get(field)?
            .as_bool()
            .ok_or_else(|| self.invalid(field, "a boolean"))
    }

    fn bool_or(&self, field: &'static str, default: bool) -> Result<bool, FormatError> {
        match self.obj.get(field) {
            None | Some(Value::Null) => Ok(default),
            Some(_) => self.bool(field),
        }
    }

    fn child<T>(&self, field: &'static str) -> Result<T, FormatError>
    where
        T: TryFrom<Block, Error = CategoryError>,
    {
        decode_as(self.get(field)?)
    }

    fn opt_child<T>(&self, field: &'static str) -> Result<Option<T>, FormatError>
    where
        T: TryFrom<Block, Error = CategoryError>,
    {
        match self.obj.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => decode_as(value).map(Some),
        }
    }

    fn list<T>(&self, field: &'static str) -> Result<Vec<T>, FormatError>
    where
        T: TryFrom<Block, Error = CategoryError>,
    {
        self.get(field)?
            .as_array()
            .ok_or_else(|| self.invalid(field, "an array"))?
            .iter()
            .map(decode_as)
            .collect()
    }

    fn args(&self, field: &'static str) -> Result<Vec<Argument>, FormatError> {
        match self.get(field)? {
            Value::Object(keyed) => {
                debug!(kind = self.kind, field, "upgrading name-keyed argument list");
                keyed
                    .iter()
                    .map(|(name, value)| {
                        Ok::<_, FormatError>(Argument::new(name.as_str(), decode_as::<Expr>(value)?))
                    })
                    .collect()
            }
            _ => self.list(field),
        }
    }

    fn typevars(&self, field: &'static str) -> Result<Vec<TypeArgument>, FormatError> {
        match self.get(field)? {
            Value::Object(keyed) => {
                debug!(kind = self.kind, field, "upgrading name-keyed typevar list");
                keyed
                    .iter()
                    .map(|(name, value)| {
                        Ok::<_, FormatError>(TypeArgument::new(name.as_str(), decode_as::<Type>(value)?))
                    })
                    .collect()
            }
            _ => self.list(field),
        }
    }
}

trait Encode {
    fn encode(&self) -> Value;
}

fn encode_all<T: Encode>(items: &[T]) -> Value {
    Value::Array(items.iter().map(Encode::encode).collect())
}

impl Encode for TypeIdentifier {
    fn encode(&self) -> Value {
        json!({ "_type": "TypeIdentifier", "id": self.id })
    }
}

impl Encode for TypeArgument {
    fn encode(&self) -> Value {
        json!({ "_type": "TypeArgument", "name": self.name, "type": self.ty.encode() })
    }
}

impl Encode for PolymorphicType {
    fn encode(&self) -> Value {
        json!({
            "_type": "PolymorphicType",
            "id": self.id.encode(),
            "typevars": encode_all(&self.typevars),
        })
    }
}

impl Encode for Type {
    fn encode(&self) -> Value {
        match self {
            Type::Identifier(ty) => ty.encode(),
            Type::Polymorphic(ty) => ty.encode(),
        }
    }
}

impl Encode for Num {
    fn encode(&self) -> Value {
        json!({ "_type": "Num", "value": self.value, "isFloat": self.is_float })
    }
}

impl Encode for Str {
    fn encode(&self) -> Value {
        json!({ "_type": "Str", "value": self.value })
    }
}

impl Encode for Identifier {
    fn encode(&self) -> Value {
        json!({ "_type": "Identifier", "id": self.id })
    }
}

impl Encode for Declaration {
    fn encode(&self) -> Value {
        json!({
            "_type": "Declaration",
            "arg": self.arg.encode(),
            "type": self.ty.encode(),
        })
    }
}

impl Encode for Func {
    fn encode(&self) -> Value {
        json!({
            "_type": "Func",
            "decls": encode_all(&self.decls),
            "returnType": self.return_type.encode(),
            "body": self.body.encode(),
        })
    }
}

impl Encode for Argument {
    fn encode(&self) -> Value {
        json!({
            "_type": "Argument",
            "name": self.name.encode(),
            "value": self.value.encode(),
        })
    }
}

impl Encode for Create {
    fn encode(&self) -> Value {
        json!({ "_type": "Create", "type": self.ty.encode(), "args": encode_all(&self.args) })
    }
}

impl Encode for Call {
    fn encode(&self) -> Value {
        json!({ "_type": "Call", "func": self.func.encode(), "args": encode_all(&self.args) })
    }
}

impl Encode for Expr {
    fn encode(&self) -> Value {
        match self {
            Expr::Num(e) => e.encode(),
            Expr::Str(e) => e.encode(),
            Expr::Identifier(e) => e.encode(),
            Expr::Func(e) => e.encode(),
            Expr::Create(e) => e.encode(),
            Expr::Call(e) => e.encode(),
        }
    }
}

impl Encode for Assign {
    fn encode(&self) -> Value {
        json!({
            "_type": "Assign",
            "lhs": self.lhs.encode(),
            "isDefine": self.is_define,
            "rhs": self.rhs.encode(),
        })
    }
}

impl Encode for Do {
    fn encode(&self) -> Value {
        json!({ "_type": "Do", "expr": self.expr.encode() })
    }
}

impl Encode for Foreach {
    fn encode(&self) -> Value {
        json!({
            "_type": "Foreach",
            "id": self.id.encode(),
            "iterable": self.iterable.encode(),
            "body": self.body.encode(),
        })
    }
}

impl Encode for While {
    fn encode(&self) -> Value {
        json!({ "_type": "While", "cond": self.cond.encode(), "body": self.body.encode() })
    }
}

impl Encode for Branch {
    fn encode(&self) -> Value {
        json!({
            "_type": "Branch",
            "cases": encode_all(&self.cases),
            "default": self.default.as_ref().map_or(Value::Null, Encode::encode),
        })
    }
}

impl Encode for Case {
    fn encode(&self) -> Value {
        json!({ "_type": "Case", "cond": self.cond.encode(), "body": self.body.encode() })
    }
}

impl Encode for DefaultCase {
    fn encode(&self) -> Value {
        json!({ "_type": "Default", "body": self.body.encode() })
    }
}

impl Encode for Return {
    fn encode(&self) -> Value {
        json!({
            "_type": "Return",
            "value": self.value.as_ref().map_or(Value::Null, Encode::encode),
        })
    }
}

impl Encode for Suite {
    fn encode(&self) -> Value {
        json!({ "_type": "Suite", "stmts": encode_all(&self.stmts) })
    }
}

impl Encode for Stmt {
    fn encode(&self) -> Value {
        match self {
            Stmt::Assign(s) => s.encode(),
            Stmt::Do(s) => s.encode(),
            Stmt::Foreach(s) => s.encode(),
            Stmt::While(s) => s.encode(),
            Stmt::Branch(s) => s.encode(),
            Stmt::Return(s) => s.encode(),
            Stmt::Break => json!({ "_type": "Break" }),
            Stmt::Continue => json!({ "_type": "Continue" }),
            Stmt::Suite(s) => s.encode(),
        }
    }
}
