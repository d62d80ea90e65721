use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// One roster entry as it appears in the data file. Every field is optional
/// at this stage so that validation can name the offending record instead of
/// surfacing an opaque decode error.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct RawMemberRecord {
    pub name: Option<String>,
    pub nickname: Option<String>,
    pub year: Option<i32>,
    pub photo: Option<String>,
    pub video: Option<String>,
    pub deceased: Option<bool>,
}

/// A validated roster entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberRecord {
    pub name: String,
    pub nickname: Option<String>,
    pub year: i32,
    pub photo: String,
    pub video: Option<String>,
    pub deceased: bool,
}

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to parse roster JSON: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },

    #[error("record {index} ('{name}') has no year")]
    MissingYear { index: usize, name: String },

    #[error("record {index} has no name")]
    MissingName { index: usize },

    #[error("record {index} ('{name}') has no photo")]
    MissingPhoto { index: usize, name: String },
}

/// Decode and validate an ordered roster. Input order is preserved; it is
/// what defines the display order of members within a year.
pub fn parse_roster(json: &str) -> Result<Vec<MemberRecord>, RosterError> {
    let raw: Vec<RawMemberRecord> =
        serde_json::from_str(json).map_err(|source| RosterError::Parse { source })?;

    let mut records = Vec::with_capacity(raw.len());
    for (index, entry) in raw.into_iter().enumerate() {
        records.push(validate_record(index, entry)?);
    }
    Ok(records)
}

fn validate_record(index: usize, raw: RawMemberRecord) -> Result<MemberRecord, RosterError> {
    let name = match raw.name {
        Some(name) if !name.trim().is_empty() => name,
        _ => return Err(RosterError::MissingName { index }),
    };
    let year = match raw.year {
        Some(year) => year,
        None => {
            return Err(RosterError::MissingYear {
                index,
                name: name.clone(),
            })
        }
    };
    let photo = match raw.photo {
        Some(photo) if !photo.trim().is_empty() => photo,
        _ => {
            return Err(RosterError::MissingPhoto {
                index,
                name: name.clone(),
            })
        }
    };

    let nickname = match raw.nickname {
        Some(nickname) if !nickname.trim().is_empty() => Some(nickname),
        _ => None,
    };
    let video = match raw.video {
        Some(video) if !video.trim().is_empty() => Some(video),
        _ => None,
    };

    Ok(MemberRecord {
        name,
        nickname,
        year,
        photo,
        video,
        deceased: raw.deceased.unwrap_or(false),
    })
}
