use crate::core::display::{
    format_data_title, format_info_line, output_header, render_area_description,
    render_contact_info, render_crimes_info, render_engagement_methods,
};
use crate::core::{CrimeMonth, LookupService, Result};

/// Builds the `area` report: the force covering the postcode, the
/// neighbourhood's contact details and its description.
pub async fn area_report<L: LookupService>(lookup: &L, postcode: &str) -> Result<String> {
    let coords = lookup.resolve_coordinates(postcode).await?;
    let context = lookup.resolve_policing_context(&coords).await?;
    tracing::info!(
        "Resolved {} to force '{}', neighbourhood '{}'",
        postcode,
        context.force,
        context.neighbourhood
    );
    let info = lookup.fetch_area_info(&context).await?;

    let mut out = String::new();
    out.push_str(&format!(
        "{} is covered by {}\n",
        postcode,
        format_data_title(&format!("{} Constabulary", context.force))
    ));
    out.push_str(&output_header("Contact Info"));
    out.push_str(&render_contact_info(&info.contact_details));
    out.push_str(&output_header("Description"));
    out.push_str(&render_area_description(info.description.as_deref()));

    Ok(out)
}

/// Builds the `contact` report: just the neighbourhood's contact block.
pub async fn contact_report<L: LookupService>(lookup: &L, postcode: &str) -> Result<String> {
    let coords = lookup.resolve_coordinates(postcode).await?;
    let context = lookup.resolve_policing_context(&coords).await?;
    let info = lookup.fetch_area_info(&context).await?;

    let mut out = String::new();
    out.push_str(&output_header(&format!(
        "Contact Info for {}",
        format_data_title(&context.force)
    )));
    out.push_str(&render_contact_info(&info.contact_details));

    Ok(out)
}

/// Builds the `force` report: telephone, website and engagement methods of
/// the force covering the postcode.
pub async fn force_report<L: LookupService>(lookup: &L, postcode: &str) -> Result<String> {
    let coords = lookup.resolve_coordinates(postcode).await?;
    let context = lookup.resolve_policing_context(&coords).await?;
    tracing::info!("Resolved {} to force '{}'", postcode, context.force);
    let info = lookup.fetch_force_info(&context.force).await?;

    let mut out = String::new();
    out.push_str(&format!(
        "{} is covered by {} Constabulary\n",
        postcode,
        format_data_title(&context.force)
    ));
    out.push_str(&format_info_line("Telephone", info.telephone.as_deref()));
    out.push_str(&format_info_line("Website", info.url.as_deref()));
    out.push_str(&render_engagement_methods(&info.engagement_methods));

    Ok(out)
}

/// Builds the `crimes` report: street-level crimes near the postcode,
/// optionally limited to one month. Skips the neighbourhood locator; crimes
/// are keyed by coordinates alone.
pub async fn crimes_report<L: LookupService>(
    lookup: &L,
    postcode: &str,
    month: Option<&CrimeMonth>,
) -> Result<String> {
    let coords = lookup.resolve_coordinates(postcode).await?;
    let crimes = lookup.fetch_street_crimes(&coords, month).await?;
    tracing::info!("Found {} crimes near {}", crimes.len(), postcode);

    Ok(render_crimes_info(&crimes))
}
