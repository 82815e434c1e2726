#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    Rss2,
    Rdf,
    Atom,
}

impl Dialect {
    /// Default resolution order.
    pub const ALL: [Dialect; 3] = [Dialect::Rss2, Dialect::Rdf, Dialect::Atom];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Rss2 => "rss2",
            Dialect::Rdf => "rdf",
            Dialect::Atom => "atom",
        }
    }
}

impl std::str::FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rss2" | "rss" => Ok(Dialect::Rss2),
            "rdf" | "rss1" => Ok(Dialect::Rdf),
            "atom" => Ok(Dialect::Atom),
            _ => Err(format!("Unknown dialect: {}", s)),
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_accepts_aliases() {
        assert_eq!("rss".parse::<Dialect>().unwrap(), Dialect::Rss2);
        assert_eq!(" RDF ".parse::<Dialect>().unwrap(), Dialect::Rdf);
        assert_eq!("rss1".parse::<Dialect>().unwrap(), Dialect::Rdf);
        assert_eq!("Atom".parse::<Dialect>().unwrap(), Dialect::Atom);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("json".parse::<Dialect>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for dialect in Dialect::ALL {
            assert_eq!(dialect.to_string().parse::<Dialect>().unwrap(), dialect);
        }
    }
}
