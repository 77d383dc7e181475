// quad-core-client/quad-core-client
//
// Copyright: 2025, Robin Ferrand <robin@quad.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub trait StringExt {
    /// Truncates at a character boundary and appends an ellipsis when content was cut off.
    /// Used for notification previews.
    fn to_preview(&self, max_chars: usize) -> String;
}

impl<T> StringExt for T
where
    T: AsRef<str>,
{
    fn to_preview(&self, max_chars: usize) -> String {
        let s = self.as_ref();
        if s.chars().count() <= max_chars {
            return s.to_string();
        }
        s.chars().take(max_chars).collect::<String>() + "…"
    }
}
