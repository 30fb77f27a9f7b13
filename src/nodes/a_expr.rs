use crate::{builder::{BuildError, RawEnum, RawRecord}, nodes::{dotted_names, Node}};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AExprKind {
    Op,
    OpAny,
    OpAll,
    Distinct,
    NotDistinct,
    NullIf,
    Of,
    In,
    Like,
    ILike,
    Similar,
    Between,
    NotBetween,
    BetweenSym,
    NotBetweenSym,
    Paren,
}

impl RawEnum for AExprKind {
    fn from_code(code: i64) -> Option<Self> {
        use AExprKind::*;
        Some(match code {
            0 => Op,
            1 => OpAny,
            2 => OpAll,
            3 => Distinct,
            4 => NotDistinct,
            5 => NullIf,
            6 => Of,
            7 => In,
            8 => Like,
            9 => ILike,
            10 => Similar,
            11 => Between,
            12 => NotBetween,
            13 => BetweenSym,
            14 => NotBetweenSym,
            15 => Paren,
            _ => return None,
        })
    }

    fn from_symbol(symbol: &str) -> Option<Self> {
        use AExprKind::*;
        Some(match symbol {
            "AEXPR_OP" => Op,
            "AEXPR_OP_ANY" => OpAny,
            "AEXPR_OP_ALL" => OpAll,
            "AEXPR_DISTINCT" => Distinct,
            "AEXPR_NOT_DISTINCT" => NotDistinct,
            "AEXPR_NULLIF" => NullIf,
            "AEXPR_OF" => Of,
            "AEXPR_IN" => In,
            "AEXPR_LIKE" => Like,
            "AEXPR_ILIKE" => ILike,
            "AEXPR_SIMILAR" => Similar,
            "AEXPR_BETWEEN" => Between,
            "AEXPR_NOT_BETWEEN" => NotBetween,
            "AEXPR_BETWEEN_SYM" => BetweenSym,
            "AEXPR_NOT_BETWEEN_SYM" => NotBetweenSym,
            "AEXPR_PAREN" => Paren,
            _ => return None,
        })
    }
}

/// Operator expression before operator lookup: `lexpr op rexpr`.
#[derive(Debug, Clone, PartialEq)]
pub struct AExpr {
    pub kind: AExprKind,
    pub name: Vec<Node>,
    pub lexpr: Option<Box<Node>>,
    pub rexpr: Option<Box<Node>>,
    pub location: i64,
}

impl AExpr {
    pub fn build(record: &RawRecord) -> Result<Self, BuildError> {
        Ok(Self {
            kind: record.enumeration("kind")?,
            name: record.children("name")?,
            lexpr: record.child("lexpr")?,
            rexpr: record.child("rexpr")?,
            location: record.location()?,
        })
    }

    pub fn operator(&self) -> String {
        dotted_names(&self.name)
    }

    pub fn children(&self) -> Vec<&Node> {
        let mut out: Vec<&Node> = self.name.iter().collect();
        out.extend(self.lexpr.as_deref());
        out.extend(self.rexpr.as_deref());
        out
    }
}
