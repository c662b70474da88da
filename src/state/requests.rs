use std::collections::HashMap;
use std::fmt;

/// Independently fetched collection in the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Offers,
    Offer,
    NearbyOffers,
    Reviews,
    /// Favorite status writes, tracked per offer id
    Favorite,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resource::Offers => "offers",
            Resource::Offer => "offer",
            Resource::NearbyOffers => "nearby offers",
            Resource::Reviews => "reviews",
            Resource::Favorite => "favorite status",
        };
        f.write_str(name)
    }
}

/// Identity of one issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub resource: Resource,
    serial: u64,
}

type Key = (Resource, Option<String>);

/// Tracks the latest request issued per resource, optionally per offer id.
///
/// Only the holder of the latest ticket may write its resource, whatever
/// order the responses arrive in.
#[derive(Debug, Default)]
pub struct RequestLedger {
    next_serial: u64,
    latest: HashMap<Key, u64>,
}

impl RequestLedger {
    pub fn issue(&mut self, resource: Resource) -> Ticket {
        self.issue_key((resource, None))
    }

    /// Issue a ticket that only competes with requests for the same `scope`
    pub fn issue_scoped(&mut self, resource: Resource, scope: &str) -> Ticket {
        self.issue_key((resource, Some(scope.to_string())))
    }

    /// The latest ticket for `resource`, issuing one if none is live.
    ///
    /// Unlike `issue`, this does not supersede a request already in flight.
    pub fn watch(&mut self, resource: Resource) -> Ticket {
        match self.latest.get(&(resource, None)) {
            Some(&serial) => Ticket { resource, serial },
            None => self.issue(resource),
        }
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.get(&(ticket.resource, None)) == Some(&ticket.serial)
    }

    pub fn is_current_scoped(&self, ticket: Ticket, scope: &str) -> bool {
        self.latest.get(&(ticket.resource, Some(scope.to_string()))) == Some(&ticket.serial)
    }

    /// Make every in-flight ticket for `resource` stale
    pub fn invalidate(&mut self, resource: Resource) {
        self.latest.retain(|(held, _), _| *held != resource);
    }

    fn issue_key(&mut self, key: Key) -> Ticket {
        self.next_serial += 1;
        let resource = key.0;
        self.latest.insert(key, self.next_serial);
        Ticket {
            resource,
            serial: self.next_serial,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_ticket_supersedes_older() {
        let mut ledger = RequestLedger::default();
        let first = ledger.issue(Resource::Reviews);
        let second = ledger.issue(Resource::Reviews);
        assert!(!ledger.is_current(first));
        assert!(ledger.is_current(second));
    }

    #[test]
    fn test_resources_are_independent() {
        let mut ledger = RequestLedger::default();
        let reviews = ledger.issue(Resource::Reviews);
        let nearby = ledger.issue(Resource::NearbyOffers);
        assert!(ledger.is_current(reviews));
        assert!(ledger.is_current(nearby));
    }

    #[test]
    fn test_invalidate() {
        let mut ledger = RequestLedger::default();
        let ticket = ledger.issue(Resource::Offer);
        ledger.invalidate(Resource::Offer);
        assert!(!ledger.is_current(ticket));
    }

    #[test]
    fn test_scoped_tickets_only_compete_within_scope() {
        let mut ledger = RequestLedger::default();
        let first_a = ledger.issue_scoped(Resource::Favorite, "a");
        let b = ledger.issue_scoped(Resource::Favorite, "b");
        assert!(ledger.is_current_scoped(first_a, "a"));
        assert!(ledger.is_current_scoped(b, "b"));
        assert!(!ledger.is_current_scoped(first_a, "b"));

        let second_a = ledger.issue_scoped(Resource::Favorite, "a");
        assert!(!ledger.is_current_scoped(first_a, "a"));
        assert!(ledger.is_current_scoped(second_a, "a"));
    }

    #[test]
    fn test_watch_does_not_supersede() {
        let mut ledger = RequestLedger::default();
        let fetch = ledger.issue(Resource::Reviews);
        let watcher = ledger.watch(Resource::Reviews);
        assert_eq!(fetch, watcher);
        assert!(ledger.is_current(fetch));

        ledger.issue(Resource::Reviews);
        assert!(!ledger.is_current(watcher));
    }

    #[test]
    fn test_watch_issues_when_nothing_is_live() {
        let mut ledger = RequestLedger::default();
        let watcher = ledger.watch(Resource::Reviews);
        assert!(ledger.is_current(watcher));

        ledger.invalidate(Resource::Reviews);
        assert!(!ledger.is_current(watcher));
        assert_ne!(ledger.watch(Resource::Reviews), watcher);
    }
}
