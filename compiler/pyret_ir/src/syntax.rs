//! Node kinds and the `rowan` language binding.
//!
//! Every grammar production that appears in the tree has a [`NodeKind`].
//! Tokens and nodes share one `rowan` kind space: token kinds occupy raw
//! values `0..256`, node kinds `256..512`.

use std::fmt;

use crate::TokenKind;

define_kinds! {
    /// Interior node kinds of the concrete syntax tree.
    pub enum NodeKind {
        // === Module structure ===
        SourceFile => "program",
        UseStmt => "use_stmt",
        ImportStmt => "import_stmt",
        ImportSource => "import_source",
        ImportSpecial => "import_special",
        ImportName => "import_name",
        IncludeSpec => "include_spec",
        IncludeNameSpec => "include_name_spec",
        IncludeTypeSpec => "include_type_spec",
        IncludeDataSpec => "include_data_spec",
        IncludeModuleSpec => "include_module_spec",
        ProvideStmt => "provide_stmt",
        ProvideValsStmt => "provide_vals_stmt",
        ProvideTypesStmt => "provide_types_stmt",
        ProvideBlock => "provide_block",
        ProvideSpec => "provide_spec",
        NameSpec => "name_spec",
        DataNameSpec => "data_name_spec",
        ProvideNameSpec => "provide_name_spec",
        ProvideTypeSpec => "provide_type_spec",
        ProvideDataSpec => "provide_data_spec",
        ProvideModuleSpec => "provide_module_spec",
        HidingSpec => "hiding_spec",
        ModuleRef => "module_ref",
        CommaNames => "comma_names",

        // === Statements ===
        Block => "block",
        SpyStmt => "spy_stmt",
        SpyContents => "spy_contents",
        SpyField => "spy_field",
        TypeExpr => "type_expr",
        NewtypeExpr => "newtype_expr",
        LetExpr => "let_expr",
        Binding => "binding",
        TupleBinding => "tuple_binding",
        NameBinding => "name_binding",
        ToplevelBinding => "toplevel_binding",
        MultiLetExpr => "multi_let_expr",
        LetBinding => "let_binding",
        LetrecExpr => "letrec_expr",
        TypeBind => "type_bind",
        NewtypeBind => "newtype_bind",
        TypeLetBind => "type_let_bind",
        TypeLetExpr => "type_let_expr",
        ContractStmt => "contract_stmt",
        FunExpr => "fun_expr",
        FunHeader => "fun_header",
        TyParams => "ty_params",
        Args => "args",
        ReturnAnn => "return_ann",
        DocString => "doc_string",
        WhereClause => "where_clause",
        CheckExpr => "check_expr",
        CheckTest => "check_test",
        DataExpr => "data_expr",
        VariantConstructor => "variant_constructor",
        FirstDataVariant => "first_data_variant",
        DataVariant => "data_variant",
        VariantMembers => "variant_members",
        VariantMember => "variant_member",
        DataWith => "data_with",
        DataSharing => "data_sharing",
        VarExpr => "var_expr",
        RecExpr => "rec_expr",
        AssignExpr => "assign_expr",
        WhenExpr => "when_expr",

        // === Operators ===
        BinopExpr => "binop_expr",
        Binop => "binop",
        CheckOp => "check_op",
        CheckOpPostfix => "check_op_postfix",

        // === Primary expressions ===
        TemplateExpr => "template_expr",
        ParenExpr => "paren_expr",
        IdExpr => "id_expr",
        PrimExpr => "prim_expr",
        NumExpr => "num_expr",
        FracExpr => "frac_expr",
        RfracExpr => "rfrac_expr",
        BoolExpr => "bool_expr",
        StringExpr => "string_expr",
        String => "string",
        LambdaExpr => "lambda_expr",
        MethodExpr => "method_expr",
        AppExpr => "app_expr",
        AppArgs => "app_args",
        CommaBinops => "comma_binops",
        InstExpr => "inst_expr",
        TupleExpr => "tuple_expr",
        TupleFields => "tuple_fields",
        TupleGet => "tuple_get",
        ObjExpr => "obj_expr",
        ObjFields => "obj_fields",
        ObjField => "obj_field",
        Fields => "fields",
        Field => "field",
        Key => "key",
        ConstructExpr => "construct_expr",
        ConstructModifier => "construct_modifier",
        TableExpr => "table_expr",
        TableHeaders => "table_headers",
        ListTableHeader => "list_table_header",
        TableHeader => "table_header",
        TableRows => "table_rows",
        TableRow => "table_row",
        TableItems => "table_items",
        ListTableItem => "list_table_item",
        ReactorExpr => "reactor_expr",

        // === Postfix ===
        DotExpr => "dot_expr",
        BracketExpr => "bracket_expr",
        GetBangExpr => "get_bang_expr",
        ExtendExpr => "extend_expr",
        UpdateExpr => "update_expr",

        // === Control flow ===
        IfExpr => "if_expr",
        ElseIf => "else_if",
        IfPipeExpr => "if_pipe_expr",
        IfPipeBranch => "if_pipe_branch",
        CasesBinding => "cases_binding",
        CasesArgs => "cases_args",
        CasesExpr => "cases_expr",
        CasesBranch => "cases_branch",
        ForBind => "for_bind",
        ForExpr => "for_expr",
        UserBlockExpr => "user_block_expr",

        // === Table operations ===
        ColumnOrder => "column_order",
        TableSelect => "table_select",
        TableFilter => "table_filter",
        TableOrder => "table_order",
        TableExtract => "table_extract",
        TableUpdate => "table_update",
        TableExtend => "table_extend",
        TableExtendFields => "table_extend_fields",
        ListTableExtendField => "list_table_extend_field",
        TableExtendField => "table_extend_field",
        LoadTableExpr => "load_table_expr",
        LoadTableSpecs => "load_table_specs",
        LoadTableSpec => "load_table_spec",

        // === Annotations ===
        Ann => "ann",
        NameAnn => "name_ann",
        CommaAnnField => "comma_ann_field",
        TrailingCommaAnnField => "trailing_comma_ann_field",
        RecordAnn => "record_ann",
        AnnField => "ann_field",
        TupleAnn => "tuple_ann",
        NoparenArrowAnn => "noparen_arrow_ann",
        ArrowAnnArgs => "arrow_ann_args",
        ArrowAnn => "arrow_ann",
        AppAnn => "app_ann",
        CommaAnns => "comma_anns",
        PredAnn => "pred_ann",
        DotAnn => "dot_ann",

        // === Recovery ===
        /// Input the grammar could not place, or a zero-width marker for a
        /// missing closer.
        Error => "ERROR",
    }
}

impl NodeKind {
    /// Offset of node kinds in the shared raw kind space.
    const RAW_BASE: u16 = 256;
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Either a token kind or a node kind, as stored in the tree.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum SyntaxKind {
    Token(TokenKind),
    Node(NodeKind),
}

impl SyntaxKind {
    /// The node kind, if this is a node.
    #[inline]
    pub const fn node(self) -> Option<NodeKind> {
        match self {
            SyntaxKind::Node(kind) => Some(kind),
            SyntaxKind::Token(_) => None,
        }
    }

    /// The token kind, if this is a token.
    #[inline]
    pub const fn token(self) -> Option<TokenKind> {
        match self {
            SyntaxKind::Token(kind) => Some(kind),
            SyntaxKind::Node(_) => None,
        }
    }

    /// Encode into the raw `rowan` kind space.
    #[inline]
    pub const fn to_raw(self) -> rowan::SyntaxKind {
        match self {
            SyntaxKind::Token(kind) => rowan::SyntaxKind(kind.index() as u16),
            SyntaxKind::Node(kind) => rowan::SyntaxKind(NodeKind::RAW_BASE + kind.index() as u16),
        }
    }

    /// Decode from the raw `rowan` kind space.
    ///
    /// Values that name no kind decode as [`NodeKind::Error`]; trees built
    /// by this crate never contain them.
    pub fn from_raw(raw: rowan::SyntaxKind) -> Self {
        let value = raw.0;
        let decoded = if value < NodeKind::RAW_BASE {
            u8::try_from(value)
                .ok()
                .and_then(TokenKind::from_index)
                .map(SyntaxKind::Token)
        } else {
            u8::try_from(value - NodeKind::RAW_BASE)
                .ok()
                .and_then(NodeKind::from_index)
                .map(SyntaxKind::Node)
        };
        decoded.unwrap_or(SyntaxKind::Node(NodeKind::Error))
    }
}

impl From<TokenKind> for SyntaxKind {
    fn from(kind: TokenKind) -> Self {
        SyntaxKind::Token(kind)
    }
}

impl From<NodeKind> for SyntaxKind {
    fn from(kind: NodeKind) -> Self {
        SyntaxKind::Node(kind)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        kind.to_raw()
    }
}

/// Marker type binding Pyret kinds to `rowan`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum PyretLanguage {}

impl rowan::Language for PyretLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        SyntaxKind::from_raw(raw)
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.to_raw()
    }
}

pub type SyntaxNode = rowan::SyntaxNode<PyretLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<PyretLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<PyretLanguage>;
pub type SyntaxNodeChildren = rowan::SyntaxNodeChildren<PyretLanguage>;
