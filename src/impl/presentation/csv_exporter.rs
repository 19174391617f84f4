use fractic_server_error::ServerError;

use crate::{
    entities::FuelTaxReport,
    errors::CsvWriteFailed,
    presentation::utils::{format_fixed, format_quantity},
};

const HEADER: [&str; 8] = [
    "State",
    "Miles",
    "Taxable Gallons",
    "Tax Rate",
    "Tax Owed",
    "Gallons Purchased",
    "Tax Paid",
    "Net Tax",
];

/// Writes the per-jurisdiction table followed by the summary block. Money is
/// rounded to cents and rates to tenths of a cent; amounts keep their sign.
pub(crate) struct CsvExporter;

impl CsvExporter {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn export(&self, report: &FuelTaxReport) -> Result<String, ServerError> {
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(Vec::new());
        let write_err = |e: csv::Error| CsvWriteFailed::new(&e.to_string());

        writer.write_record(HEADER).map_err(write_err)?;
        for r in &report.results {
            writer
                .write_record([
                    r.jurisdiction.name().to_string(),
                    format_quantity(r.miles),
                    format_fixed(r.taxable_gallons, 2),
                    format_fixed(r.tax_rate, 3),
                    format_fixed(r.total_liability(), 2),
                    format_quantity(r.gallons_purchased),
                    format_fixed(r.tax_paid_at_pump, 2),
                    format_fixed(r.net_tax, 2),
                ])
                .map_err(write_err)?;
        }

        let totals = &report.totals;
        for (label, value) in [
            ("Total Miles", format_quantity(totals.total_miles)),
            ("Total Gallons", format_quantity(totals.total_gallons_purchased)),
            ("Fleet MPG", format_fixed(totals.fleet_mpg, 2)),
            ("Total Tax Owed", format_fixed(totals.total_tax_owed, 2)),
            ("Total Tax Paid", format_fixed(totals.total_tax_paid, 2)),
            ("Net Tax Due", format_fixed(totals.net_tax_due, 2)),
        ] {
            writer
                .write_record([label.to_string(), value])
                .map_err(write_err)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| CsvWriteFailed::new(&e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| CsvWriteFailed::with_debug("output is not UTF-8", &e))
    }
}
