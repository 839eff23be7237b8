//! [`ExtraObject`] for the value kinds a bag commonly carries besides
//! strings and integers.

use super::ExtraObject;

macro_rules! display_object {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ExtraObject for $ty {
                fn to_display_string(&self) -> anyhow::Result<String> {
                    Ok(self.to_string())
                }
            }
        )*
    };
}

display_object!(bool, char, i32, i64, u8, f32, f64, String);

/// Rendered `[a, b, c]`.
impl<T: ExtraObject> ExtraObject for Vec<T> {
    fn to_display_string(&self) -> anyhow::Result<String> {
        let items = self
            .iter()
            .map(ExtraObject::to_display_string)
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(format!("[{}]", items.join(", ")))
    }
}

impl<T: ExtraObject> ExtraObject for Option<T> {
    fn to_display_string(&self) -> anyhow::Result<String> {
        match self {
            Some(value) => value.to_display_string(),
            None => anyhow::bail!("value is null"),
        }
    }
}

impl ExtraObject for serde_json::Value {
    fn to_display_string(&self) -> anyhow::Result<String> {
        match self {
            serde_json::Value::Null => anyhow::bail!("value is null"),
            serde_json::Value::String(s) => Ok(s.clone()),
            other => Ok(other.to_string()),
        }
    }
}
