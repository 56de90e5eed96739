//! Module Header Parsing
//!
//! The program root, `use`, `import` / `include`, and the `provide` family
//! with their name, type, data and module specs.

use pyret_ir::{NodeKind, TokenKind};
use pyret_lexer::SoftKeyword;

use crate::recovery::{HEADER_START, STMT_START};
use crate::{ErrorContext, PResult, Parser};

/// Node kinds of one spec family (`include from` or `provide`).
struct SpecKinds {
    spec: NodeKind,
    name: NodeKind,
    ty: NodeKind,
    data: NodeKind,
    module: NodeKind,
}

const INCLUDE_SPECS: SpecKinds = SpecKinds {
    spec: NodeKind::IncludeSpec,
    name: NodeKind::IncludeNameSpec,
    ty: NodeKind::IncludeTypeSpec,
    data: NodeKind::IncludeDataSpec,
    module: NodeKind::IncludeModuleSpec,
};

const PROVIDE_SPECS: SpecKinds = SpecKinds {
    spec: NodeKind::ProvideSpec,
    name: NodeKind::ProvideNameSpec,
    ty: NodeKind::ProvideTypeSpec,
    data: NodeKind::ProvideDataSpec,
    module: NodeKind::ProvideModuleSpec,
};

impl Parser<'_> {
    /// `SourceFile := UseStmt? (ProvideStmt | ImportStmt)* Block?`
    pub(crate) fn parse_source_file(&mut self) {
        let m = self.start();

        if self.at(TokenKind::Use) {
            self.parse_header_recovering(Self::parse_use_stmt);
        }
        while self.at_set(HEADER_START) {
            if self.at(TokenKind::Import) || self.at(TokenKind::Include) {
                self.parse_header_recovering(Self::parse_import_stmt);
            } else {
                self.parse_header_recovering(Self::parse_provide_stmt);
            }
        }

        self.parse_program_block();
        m.complete(self, NodeKind::SourceFile);
    }

    fn parse_header_recovering(&mut self, rule: fn(&mut Self) -> PResult) {
        let snapshot = self.snapshot();
        let result = self.in_error_context(ErrorContext::ModuleHeader, rule);
        if let Err(err) = result {
            self.restore(snapshot);
            self.record(err);
            self.recover_into_error_node(STMT_START.union(HEADER_START));
        }
    }

    /// The top-level `Block?`. Unlike nested blocks it runs to end of
    /// input: tokens that cannot start a statement (a stray `end` or `)`)
    /// become `Error` nodes inside it.
    fn parse_program_block(&mut self) {
        if self.is_at_end() {
            return;
        }
        let m = self.start();
        while !self.is_at_end() {
            if self.at_set(STMT_START) {
                self.parse_stmt_recovering();
            } else {
                let err = self.unexpected("a statement");
                self.record(err);
                self.recover_into_error_node(STMT_START);
            }
        }
        m.complete(self, NodeKind::Block);
    }

    /// `UseStmt := use NAME ImportSource`
    fn parse_use_stmt(&mut self) -> PResult {
        let m = self.start();
        self.bump();
        self.expect_name()?;
        self.parse_import_source()?;
        Ok(m.complete(self, NodeKind::UseStmt))
    }

    /// ```text
    /// ImportStmt := include ImportSource
    ///             | include from ModuleRef : IncludeSpecs end
    ///             | import ImportSource as NAME
    ///             | import CommaNames from ImportSource
    /// ```
    fn parse_import_stmt(&mut self) -> PResult {
        let m = self.start();
        let opener = self.bump_opener();

        if opener.kind == TokenKind::Include {
            if self.eat(TokenKind::From) {
                self.parse_module_ref()?;
                self.expect(TokenKind::Colon)?;
                self.parse_spec_list(&INCLUDE_SPECS)?;
                self.expect_end(opener)?;
            } else {
                self.parse_import_source()?;
            }
        } else if self.at(TokenKind::Name)
            && matches!(self.nth_kind(1), TokenKind::Comma | TokenKind::From)
        {
            self.parse_comma_names()?;
            self.expect(TokenKind::From)?;
            self.parse_import_source()?;
        } else {
            self.parse_import_source()?;
            self.expect(TokenKind::As)?;
            self.expect_name()?;
        }

        Ok(m.complete(self, NodeKind::ImportStmt))
    }

    /// `ImportSource := NAME ( STRING (, STRING)* ) | NAME`
    fn parse_import_source(&mut self) -> PResult {
        let m = self.start();
        if self.at(TokenKind::Name) && self.nth_kind(1) == TokenKind::ParenNoSpace {
            let special = self.start();
            self.bump();
            let paren = self.bump_opener();
            self.parse_string()?;
            while self.eat(TokenKind::Comma) {
                self.parse_string()?;
            }
            self.expect_rparen(paren)?;
            special.complete(self, NodeKind::ImportSpecial);
        } else {
            let name = self.start();
            self.expect_name()?;
            name.complete(self, NodeKind::ImportName);
        }
        Ok(m.complete(self, NodeKind::ImportSource))
    }

    /// ```text
    /// ProvideStmt := provide Stmt end | provide *
    ///              | provide-types RecordAnn | provide-types *
    ///              | provide: Specs end | provide from ModuleRef : Specs end
    /// ```
    fn parse_provide_stmt(&mut self) -> PResult {
        let m = self.start();
        let inner = self.start();
        let opener = self.bump_opener();

        let kind = if opener.kind == TokenKind::ProvideColon {
            self.parse_spec_list(&PROVIDE_SPECS)?;
            self.expect_end(opener)?;
            NodeKind::ProvideBlock
        } else if opener.kind == TokenKind::ProvideTypes {
            if !self.eat(TokenKind::Star) {
                self.parse_record_ann()?;
            }
            NodeKind::ProvideTypesStmt
        } else if self.eat(TokenKind::From) {
            self.parse_module_ref()?;
            self.expect(TokenKind::Colon)?;
            self.parse_spec_list(&PROVIDE_SPECS)?;
            self.expect_end(opener)?;
            NodeKind::ProvideBlock
        } else {
            if !self.eat(TokenKind::Star) {
                self.parse_stmt()?;
                self.expect_end(opener)?;
            }
            NodeKind::ProvideValsStmt
        };

        inner.complete(self, kind);
        Ok(m.complete(self, NodeKind::ProvideStmt))
    }

    /// `(Spec (, Spec)* ,?)?`, stopping before `end`.
    fn parse_spec_list(&mut self, kinds: &SpecKinds) -> PResult<()> {
        while !self.at(TokenKind::End) && !self.is_at_end() {
            self.parse_spec(kinds)?;
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        Ok(())
    }

    fn parse_spec(&mut self, kinds: &SpecKinds) -> PResult {
        let m = self.start();
        let inner = self.start();
        let kind = if self.eat(TokenKind::Type) {
            self.parse_name_spec()?;
            kinds.ty
        } else if self.eat(TokenKind::Data) {
            self.parse_data_name_spec()?;
            if self.at_soft(SoftKeyword::Hiding) {
                self.parse_hiding_spec()?;
            }
            kinds.data
        } else if self.at_soft(SoftKeyword::Module)
            && matches!(self.nth_kind(1), TokenKind::Name | TokenKind::Star)
        {
            self.bump();
            self.parse_name_spec()?;
            kinds.module
        } else {
            self.parse_name_spec()?;
            kinds.name
        };
        inner.complete(self, kind);
        Ok(m.complete(self, kinds.spec))
    }

    /// `NameSpec := * HidingSpec? | ModuleRef (as NAME)?`
    fn parse_name_spec(&mut self) -> PResult {
        let m = self.start();
        if self.eat(TokenKind::Star) {
            if self.at_soft(SoftKeyword::Hiding) {
                self.parse_hiding_spec()?;
            }
        } else {
            self.parse_module_ref()?;
            if self.eat(TokenKind::As) {
                self.expect_name()?;
            }
        }
        Ok(m.complete(self, NodeKind::NameSpec))
    }

    /// `DataNameSpec := * | ModuleRef`
    fn parse_data_name_spec(&mut self) -> PResult {
        let m = self.start();
        if !self.eat(TokenKind::Star) {
            self.parse_module_ref()?;
        }
        Ok(m.complete(self, NodeKind::DataNameSpec))
    }

    /// `HidingSpec := hiding ( (NAME ,)* NAME? )`
    fn parse_hiding_spec(&mut self) -> PResult {
        let m = self.start();
        self.bump();
        let paren = self.expect_any_paren()?;
        while self.eat(TokenKind::Name) {
            if !self.eat(TokenKind::Comma) {
                break;
            }
            if !self.at(TokenKind::Name) {
                return Err(self.unexpected("a name after `,`"));
            }
        }
        self.expect_rparen(paren)?;
        Ok(m.complete(self, NodeKind::HidingSpec))
    }

    /// `ModuleRef := (NAME .)* NAME`
    fn parse_module_ref(&mut self) -> PResult {
        let m = self.start();
        self.expect_name()?;
        while self.at(TokenKind::Dot) && self.nth_kind(1) == TokenKind::Name {
            self.bump();
            self.bump();
        }
        Ok(m.complete(self, NodeKind::ModuleRef))
    }
}
