//! Hand-off to the quote-request page.

use url::Url;

use crate::error::Result;
use crate::item::QuoteItem;

/// `"<name> (Qty: <quantity>)"` for each item, joined by `delimiter`.
pub fn format_quote_details(items: &[QuoteItem], delimiter: &str) -> String {
    items
        .iter()
        .map(|item| format!("{} (Qty: {})", item.name, item.quantity))
        .collect::<Vec<_>>()
        .join(delimiter)
}

/// Resolve `quote_page` against `location` (query and fragment dropped) and
/// set `param` to `details`, replacing any value already there.
pub fn quote_request_url(
    location: &str,
    quote_page: &str,
    param: &str,
    details: &str,
) -> Result<Url> {
    let mut base = Url::parse(location)?;
    base.set_query(None);
    base.set_fragment(None);
    let mut url = base.join(quote_page)?;

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != param)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    {
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        for (k, v) in &kept {
            pairs.append_pair(k, v);
        }
        pairs.append_pair(param, details);
    }
    Ok(url)
}
