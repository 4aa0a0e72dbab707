use std::fmt;

/// Human-readable listing entry for a single account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSummary {
    pub holder: String,
    pub document: String,
    pub balance: String,
    pub kind: &'static str,
}

impl fmt::Display for AccountSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Holder: {}", self.holder)?;
        writeln!(f, "Document: {}", self.document)?;
        writeln!(f, "{}", self.balance)?;
        return write!(f, "Account type: {}", self.kind);
    }
}
