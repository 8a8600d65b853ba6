//! WHOIS data structures.

/// Fields extracted from a raw whois response.
///
/// Every field is trimmed; a label missing from the response leaves its field empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhoisFields {
    /// Network name (`netname:`)
    pub netname: String,
    /// Organization (`org-name:`, `OrgName:`, `organization:`, `owner:`)
    pub orgname: String,
    /// Location (`location:`, falling back to `address:`)
    pub location: String,
    /// Country (`country:`)
    pub country: String,
}

impl WhoisFields {
    /// Network and organization name combined for display.
    pub fn net_org(&self) -> String {
        combine_net_org(&self.netname, &self.orgname)
    }
}

/// One row of output: a target and what whois says about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhoisRecord {
    /// Target as the user supplied it (CIDR blocks keep their prefix length)
    pub target: String,
    /// `netname / orgname`, or whichever of the two is present
    pub net_org: String,
    /// Location or postal address
    pub location: String,
    /// Country code
    pub country: String,
}

impl WhoisRecord {
    /// Builds the display record for `target` from extracted fields.
    pub fn new(target: impl Into<String>, fields: WhoisFields) -> Self {
        Self {
            target: target.into(),
            net_org: fields.net_org(),
            location: fields.location,
            country: fields.country,
        }
    }
}

/// Joins network and organization names with `" / "`.
///
/// When only one is non-empty it is returned alone; when both are empty the
/// result is empty.
pub fn combine_net_org(netname: &str, orgname: &str) -> String {
    match (netname.is_empty(), orgname.is_empty()) {
        (false, false) => format!("{netname} / {orgname}"),
        (false, true) => netname.to_string(),
        (true, false) => orgname.to_string(),
        (true, true) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_net_org_both() {
        assert_eq!(combine_net_org("NET-X", "Example Org"), "NET-X / Example Org");
    }

    #[test]
    fn test_combine_net_org_single() {
        assert_eq!(combine_net_org("NET-X", ""), "NET-X");
        assert_eq!(combine_net_org("", "Example Org"), "Example Org");
    }

    #[test]
    fn test_combine_net_org_neither() {
        assert_eq!(combine_net_org("", ""), "");
    }

    #[test]
    fn test_record_keeps_original_target() {
        let fields = WhoisFields {
            netname: "TEST-NET-1".to_string(),
            orgname: String::new(),
            location: "Somewhere".to_string(),
            country: "ZZ".to_string(),
        };
        let record = WhoisRecord::new("192.0.2.0/24", fields);
        assert_eq!(record.target, "192.0.2.0/24");
        assert_eq!(record.net_org, "TEST-NET-1");
        assert_eq!(record.location, "Somewhere");
        assert_eq!(record.country, "ZZ");
    }
}
