use futures::future::try_join_all;

use crate::error::ArchiveError;
use crate::swapi::SwapiClient;

/// Resolves every reference URL to its `key` field and joins the values
/// with ", ". Fetches run concurrently but the output order is the input
/// URL order, not completion order. Empty input yields an empty string
/// without touching the network.
pub async fn resolve_names<C>(
    client: &C,
    urls: &[String],
    key: &str,
) -> Result<String, ArchiveError>
where
    C: SwapiClient + ?Sized,
{
    let names = try_join_all(urls.iter().map(|url| client.fetch_field(url, key))).await?;
    Ok(names.join(", "))
}
