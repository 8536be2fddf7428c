use crate::lib::errors::DiffError;

use super::{ChangeStatus, FileChange};

/// Parse the NUL-separated output of `git diff --name-status -z`.
///
/// Records are `<status>\0<path>\0`, or `<status>\0<old>\0<new>\0` for
/// renames and copies. Renames and copies report the destination path.
/// Paths must be valid UTF-8; anything else is rejected rather than mangled.
pub fn parse_name_status(output: &[u8]) -> Result<Vec<FileChange>, DiffError> {
    let mut fields = output
        .split(|byte| *byte == 0)
        .filter(|field| !field.is_empty())
        .map(decode_field);
    let mut files = Vec::new();

    while let Some(status) = fields.next() {
        let status = status?;
        let letter = status.chars().next().unwrap_or_default();
        let mut next_path = || {
            fields.next().unwrap_or_else(|| {
                Err(DiffError::Truncated {
                    status: status.to_string(),
                })
            })
        };

        let change = match letter {
            'A' => FileChange::new(next_path()?, ChangeStatus::Added),
            'M' | 'T' => FileChange::new(next_path()?, ChangeStatus::Modified),
            'D' => FileChange::new(next_path()?, ChangeStatus::Deleted),
            'R' => {
                let _from = next_path()?;
                FileChange::new(next_path()?, ChangeStatus::Renamed)
            }
            'C' => {
                let _from = next_path()?;
                FileChange::new(next_path()?, ChangeStatus::Added)
            }
            _ => {
                return Err(DiffError::UnknownStatus {
                    status: status.to_string(),
                    path: fields.next().transpose()?.unwrap_or_default().to_string(),
                })
            }
        };
        files.push(change);
    }

    Ok(files)
}

fn decode_field(field: &[u8]) -> Result<&str, DiffError> {
    std::str::from_utf8(field).map_err(|_| DiffError::NonUtf8Path {
        lossy: String::from_utf8_lossy(field).into_owned(),
    })
}
