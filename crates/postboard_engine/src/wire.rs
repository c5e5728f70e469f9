//! Wire shapes of the placeholder API and their mapping into core records.
//!
//! The remote "body" field becomes `content` and "userId" becomes
//! `owner_id`; unknown remote fields (e.g. the user geo block) are ignored.

use postboard_core::{Address, Company, PostRecord, UserRecord};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct RawPost {
    id: u64,
    title: String,
    body: String,
    #[serde(rename = "userId")]
    user_id: u64,
}

impl From<RawPost> for PostRecord {
    fn from(raw: RawPost) -> Self {
        Self {
            id: raw.id,
            title: raw.title,
            content: raw.body,
            owner_id: raw.user_id,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawUser {
    id: u64,
    name: String,
    username: String,
    email: String,
    address: RawAddress,
    phone: String,
    website: String,
    company: RawCompany,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawAddress {
    street: String,
    suite: String,
    city: String,
    zipcode: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawCompany {
    name: String,
    #[serde(rename = "catchPhrase")]
    catch_phrase: String,
    bs: String,
}

impl From<RawUser> for UserRecord {
    fn from(raw: RawUser) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            username: raw.username,
            email: raw.email,
            address: Address {
                street: raw.address.street,
                suite: raw.address.suite,
                city: raw.address.city,
                zipcode: raw.address.zipcode,
            },
            phone: raw.phone,
            website: raw.website,
            company: Company {
                name: raw.company.name,
                catch_phrase: raw.company.catch_phrase,
                bs: raw.company.bs,
            },
        }
    }
}
