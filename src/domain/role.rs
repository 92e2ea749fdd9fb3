use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoleLevel {
    #[default]
    Member,
    Administrator,
    Owner,
}

impl RoleLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleLevel::Member => "member",
            RoleLevel::Administrator => "administrator",
            RoleLevel::Owner => "owner",
        }
    }
}

impl FromStr for RoleLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "member" => Ok(RoleLevel::Member),
            "administrator" => Ok(RoleLevel::Administrator),
            "owner" => Ok(RoleLevel::Owner),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

impl fmt::Display for RoleLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
