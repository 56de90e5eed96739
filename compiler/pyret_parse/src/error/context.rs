//! Error context for "while parsing X" messages.

/// What the parser was working on when an error occurred.
///
/// ```ignore
/// self.in_error_context(ErrorContext::CasesExpression, |p| {
///     p.parse_cases_body()
/// })
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    // === Top-level ===
    #[default]
    Module,
    /// `use`, `import`, `include` or `provide`.
    ModuleHeader,
    Statement,

    // === Declarations ===
    FunctionDef,
    DataDef,
    TypeDef,
    Contract,
    CheckBlock,

    // === Expressions ===
    Expression,
    IfExpression,
    AskExpression,
    CasesExpression,
    ForExpression,
    Lambda,
    ObjectLiteral,
    ConstructExpression,
    FunctionCall,
    TableExpression,
    LetBinding,

    // === Annotations ===
    TypeAnnotation,
    FunctionHeader,
}

impl ErrorContext {
    /// Phrase suitable for "while parsing {description}".
    pub fn description(self) -> &'static str {
        match self {
            Self::Module => "a program",
            Self::ModuleHeader => "an import or provide",
            Self::Statement => "a statement",
            Self::FunctionDef => "a function definition",
            Self::DataDef => "a data definition",
            Self::TypeDef => "a type declaration",
            Self::Contract => "a contract",
            Self::CheckBlock => "a check block",
            Self::Expression => "an expression",
            Self::IfExpression => "an if expression",
            Self::AskExpression => "an ask expression",
            Self::CasesExpression => "a cases expression",
            Self::ForExpression => "a for expression",
            Self::Lambda => "an anonymous function",
            Self::ObjectLiteral => "an object literal",
            Self::ConstructExpression => "a construct expression",
            Self::FunctionCall => "a function call",
            Self::TableExpression => "a table expression",
            Self::LetBinding => "a binding",
            Self::TypeAnnotation => "a type annotation",
            Self::FunctionHeader => "a function header",
        }
    }
}
