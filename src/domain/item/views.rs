// src/domain/item/views.rs
use crate::domain::item::entity::Item;
use crate::domain::item::value_objects::{ItemId, ItemKind};
use crate::domain::user::UserId;
use std::fmt;
use std::net::IpAddr;

/// Capability set the view gate needs from anything it counts views for.
pub trait ViewTarget {
    fn view_kind(&self) -> ItemKind;
    fn view_id(&self) -> ItemId;
    fn owner_id(&self) -> UserId;
}

impl ViewTarget for Item {
    fn view_kind(&self) -> ItemKind {
        self.kind
    }

    fn view_id(&self) -> ItemId {
        self.id
    }

    fn owner_id(&self) -> UserId {
        self.author.id
    }
}

/// Network address a request came from, as used for view de-duplication.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientAddress(String);

impl ClientAddress {
    pub const UNKNOWN: &'static str = "unknown";

    pub fn unknown() -> Self {
        Self(Self::UNKNOWN.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<IpAddr> for ClientAddress {
    fn from(value: IpAddr) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ClientAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Who is looking at an item: an optional account plus the source address.
/// Anonymous viewers are identified by address alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer {
    pub user_id: Option<UserId>,
    pub address: ClientAddress,
}

impl Viewer {
    pub fn new(user_id: Option<UserId>, address: ClientAddress) -> Self {
        Self { user_id, address }
    }

    pub fn anonymous(address: ClientAddress) -> Self {
        Self::new(None, address)
    }

    pub fn owns<T: ViewTarget + ?Sized>(&self, target: &T) -> bool {
        self.user_id == Some(target.owner_id())
    }
}

/// Marker key. The kind is part of the key so article and product ids never
/// share a marker.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ViewKey(String);

impl ViewKey {
    pub fn new(kind: ItemKind, address: &ClientAddress, id: ItemId) -> Self {
        Self(format!("view_count:{}:{}:{}", kind.as_str(), address, id))
    }

    pub fn for_view<T: ViewTarget + ?Sized>(viewer: &Viewer, target: &T) -> Self {
        Self::new(target.view_kind(), &viewer.address, target.view_id())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ViewKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
