/// A nominal type name such as `Integer` or `Map`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeIdentifier {
    pub id: String,
}

impl TypeIdentifier {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// One `name=type` binding inside a polymorphic instantiation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeArgument {
    pub name: String,
    pub ty: Type,
}

impl TypeArgument {
    pub fn new(name: impl Into<String>, ty: impl Into<Type>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// A generic type instantiated with named type arguments.
///
/// The arguments are kept in the order the producer wrote them. Lowering
/// reorders them into the order the binding descriptor declares.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PolymorphicType {
    pub id: TypeIdentifier,
    pub typevars: Vec<TypeArgument>,
}

impl PolymorphicType {
    pub fn new(id: impl Into<TypeIdentifier>, typevars: Vec<TypeArgument>) -> Self {
        Self {
            id: id.into(),
            typevars,
        }
    }

    pub fn typevar(&self, name: &str) -> Option<&TypeArgument> {
        self.typevars.iter().find(|arg| arg.name == name)
    }

    /// First type argument name that occurs more than once, if any.
    pub fn duplicate_typevar(&self) -> Option<&str> {
        self.typevars.iter().enumerate().find_map(|(i, arg)| {
            self.typevars[..i]
                .iter()
                .any(|earlier| earlier.name == arg.name)
                .then_some(arg.name.as_str())
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Identifier(TypeIdentifier),
    Polymorphic(PolymorphicType),
}

impl Type {
    /// The nominal name of the type, ignoring any type arguments.
    pub fn name(&self) -> &str {
        match self {
            Type::Identifier(ty) => &ty.id,
            Type::Polymorphic(ty) => &ty.id.id,
        }
    }

    pub fn is_polymorphic(&self) -> bool {
        matches!(self, Type::Polymorphic(_))
    }
}

impl From<&str> for TypeIdentifier {
    fn from(id: &str) -> Self {
        TypeIdentifier::new(id)
    }
}

impl From<TypeIdentifier> for Type {
    fn from(ty: TypeIdentifier) -> Self {
        Type::Identifier(ty)
    }
}

impl From<PolymorphicType> for Type {
    fn from(ty: PolymorphicType) -> Self {
        Type::Polymorphic(ty)
    }
}

impl From<&str> for Type {
    fn from(id: &str) -> Self {
        Type::Identifier(TypeIdentifier::new(id))
    }
}
