// Static documentation content for the SharePoint Storage Monitor
//
// The monitor itself is a PowerShell Azure Function that lives in its own
// repository; everything here is display text describing it. The viewer
// treats every payload as an opaque string - nothing is parsed or templated.

/// A content section of the documentation, shown one at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Overview,
    Code,
    Deployment,
    Dashboard,
    Troubleshooting,
    MultiTenant,
    Cicd,
}

impl Section {
    /// All sections in tab order
    pub const ALL: [Section; 7] = [
        Section::Overview,
        Section::Code,
        Section::Deployment,
        Section::Dashboard,
        Section::Troubleshooting,
        Section::MultiTenant,
        Section::Cicd,
    ];

    /// Stable index into per-section state arrays (scroll, widgets)
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// Get the next section in cycle
    pub fn next(self) -> Self {
        let idx = (self.index() + 1) % Self::ALL.len();
        Self::ALL[idx]
    }

    /// Get the previous section in cycle
    pub fn prev(self) -> Self {
        let idx = (self.index() + Self::ALL.len() - 1) % Self::ALL.len();
        Self::ALL[idx]
    }

    /// Display name for the tab bar
    pub fn title(&self) -> &'static str {
        match self {
            Section::Overview => "Overview",
            Section::Code => "Code",
            Section::Deployment => "Deployment",
            Section::Dashboard => "Dashboard",
            Section::Troubleshooting => "Troubleshooting",
            Section::MultiTenant => "Multi-tenant",
            Section::Cicd => "CI/CD",
        }
    }

    /// Parse a section name from config or CLI input.
    ///
    /// Case-insensitive; returns None for unknown names so callers can
    /// ignore the request and keep their current selection.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "overview" => Some(Section::Overview),
            "code" => Some(Section::Code),
            "deployment" => Some(Section::Deployment),
            "dashboard" => Some(Section::Dashboard),
            "troubleshooting" => Some(Section::Troubleshooting),
            "multi-tenant" | "multitenant" => Some(Section::MultiTenant),
            "ci/cd" | "cicd" => Some(Section::Cicd),
            _ => None,
        }
    }

    /// Cross-link target, where the section has one.
    ///
    /// The Overview and Code pages both carry a "Deployment Guide" button
    /// in the source material; Enter follows it.
    pub fn cross_link(&self) -> Option<Section> {
        match self {
            Section::Overview | Section::Code => Some(Section::Deployment),
            _ => None,
        }
    }
}

/// One renderable unit of a section
#[derive(Debug, Clone, Copy)]
pub enum Block {
    /// Informational text, pre-wrapped for an 80-column viewport
    Prose(&'static str),
    /// A copyable code listing with a header
    Code {
        title: &'static str,
        language: &'static str,
        source: &'static str,
    },
}

/// Page title shown in the title bar
pub const PAGE_TITLE: &str = "SharePoint Storage Monitor";

/// Page subtitle shown under the title
pub const PAGE_SUBTITLE: &str =
    "PowerShell application that runs as an Azure Function to track and visualize \
SharePoint storage utilization";

/// Get the blocks for a section
pub fn blocks(section: Section) -> &'static [Block] {
    match section {
        Section::Overview => OVERVIEW,
        Section::Code => CODE,
        Section::Deployment => DEPLOYMENT,
        Section::Dashboard => DASHBOARD,
        Section::Troubleshooting => TROUBLESHOOTING,
        Section::MultiTenant => MULTI_TENANT,
        Section::Cicd => CICD,
    }
}

/// Assemble a section into plain text for whole-section clipboard export
pub fn section_text(section: Section) -> String {
    let mut out = String::new();
    out.push_str(section.title());
    out.push_str("\n\n");
    for block in blocks(section) {
        match block {
            Block::Prose(text) => {
                out.push_str(text);
                out.push('\n');
            }
            Block::Code { title, source, .. } => {
                out.push_str("--- ");
                out.push_str(title);
                out.push_str(" ---\n");
                out.push_str(source);
                out.push('\n');
            }
        }
    }
    out
}

const OVERVIEW: &[Block] = &[
    Block::Prose(
        "Features

  * Automated Collection - daily collection of SharePoint site storage
    metrics
  * Secure Credentials - Azure Key Vault integration for secure credential
    storage
  * Visualization - data visualization through Azure Monitor dashboards
  * Module Management - automatic PowerShell module installation and
    management",
    ),
    Block::Prose(
        "Architecture

  PowerShell Script   (SharePoint data collection)
        |
        v
  Azure Function      (daily scheduled execution)
        |
        v
  Log Analytics       (data storage)
        |
        v
  Azure Monitor       (data visualization)",
    ),
    Block::Prose(
        "Prerequisites

  * Azure subscription
  * SharePoint Online tenant with appropriate permissions
  * SharePoint App Registration with Sites.Read.All permissions
  * PowerShell 7.2 or higher (for local testing)

Press Enter to open the deployment guide.",
    ),
];

const CODE: &[Block] = &[
    Block::Prose(
        "Main PowerShell script for SharePoint data collection. This is an
abbreviated version; the complete script includes comprehensive error
handling, secure credential management, and detailed SharePoint data
collection.",
    ),
    Block::Code {
        title: "sharepoint-storage-monitor.ps1",
        language: "powershell",
        source: r#"# SharePoint Storage Monitor
# This script collects SharePoint storage utilization and sends data to Azure Log Analytics

# Get the current script path
$scriptPath = $PSScriptRoot

# Import configuration if exists
$configPath = Join-Path -Path $scriptPath -ChildPath "config.json"
if (Test-Path $configPath) {
    $config = Get-Content -Path $configPath -Raw | ConvertFrom-Json
} else {
    # Default configuration
    $config = @{
        TenantId = $env:TenantId
        ClientId = $env:ClientId
        KeyVaultName = $env:KeyVaultName
        SecretName = $env:SecretName
        # Additional configuration...
    }
}

# Function to check and install modules
function Ensure-Module {
    param (
        [string]$ModuleName,
        [string]$MinimumVersion = ""
    )

    # Function implementation...
}

# Main execution
try {
    # Get credentials from Key Vault
    $credential = Get-SecureCredentials -TenantId $config.TenantId -ClientId $config.ClientId -KeyVaultName $config.KeyVaultName -SecretName $config.SecretName

    # Get SharePoint storage statistics
    $storageData = Get-SharePointStorageStats -TenantId $config.TenantId -Credential $credential -SiteUrls $config.SharePointSites

    # Send data to Log Analytics
    if ($storageData.Count -gt 0) {
        Send-LogAnalyticsData -WorkspaceId $config.WorkspaceId -WorkspaceKey $config.WorkspaceKey -LogName $config.LogName -Data $storageData
    }
}
catch {
    Write-Error "Error in main execution: $_"
    throw
}"#,
    },
    Block::Code {
        title: "function.json",
        language: "json",
        source: r#"{
  "bindings": [
    {
      "name": "Timer",
      "type": "timerTrigger",
      "direction": "in",
      "schedule": "0 0 0 * * *"
    }
  ],
  "disabled": false
}"#,
    },
    Block::Code {
        title: "config-sample.json",
        language: "json",
        source: r#"{
  "TenantId": "your-tenant-id",
  "ClientId": "your-client-id",
  "KeyVaultName": "your-keyvault-name",
  "SecretName": "your-secret-name",
  "WorkspaceId": "your-log-analytics-workspace-id",
  "WorkspaceKey": "your-log-analytics-workspace-key",
  "SharePointSites": [
    "tenant.sharepoint.com/sites/site1",
    "tenant.sharepoint.com/sites/site2"
  ],
  "LogName": "SharePointStorageStats"
}"#,
    },
    Block::Prose("Press Enter for deployment instructions."),
];

const DEPLOYMENT: &[Block] = &[
    Block::Prose(
        "Step 1: Register an Azure AD Application

  * Go to Azure Active Directory > App registrations
  * Create a new registration
  * Grant API permissions: SharePoint > Sites.Read.All
  * Create a client secret and save the value

Step 2: Deploy Azure Resources

Run the deployment script with your parameters:",
    ),
    Block::Code {
        title: "deploy.ps1 invocation",
        language: "powershell",
        source: r#"./deploy.ps1 \
  -ResourceGroupName "SharePointMonitor-RG" \
  -Location "eastus" \
  -FunctionAppName "sharepoint-storage-monitor" \
  -KeyVaultName "sp-monitor-kv" \
  -SharePointClientSecret "your-client-secret" \
  -TenantId "your-tenant-id" \
  -ClientId "your-app-registration-client-id" \
  -SharePointSites "tenant.sharepoint.com/sites/site1,tenant.sharepoint.com/sites/site2""#,
    },
    Block::Prose(
        "Step 3: Deploy the Function App Code

Package and deploy the code to Azure:",
    ),
    Block::Code {
        title: "package and publish",
        language: "powershell",
        source: r#"# Compress the files
Compress-Archive -Path *.ps1,*.json -DestinationPath function.zip

# Deploy to Azure Function App
Publish-AzWebapp -ResourceGroupName "SharePointMonitor-RG" \
  -Name "sharepoint-storage-monitor" \
  -ArchivePath function.zip"#,
    },
    Block::Prose(
        "Local Testing

  1. Install Azure Functions Core Tools
  2. Update local.settings.json with your values
  3. Run the function locally:",
    ),
    Block::Code {
        title: "run locally",
        language: "shell",
        source: "func start",
    },
];

const DASHBOARD: &[Block] = &[
    Block::Prose(
        "Once data is collected, you can create a custom dashboard in Azure
Monitor to visualize storage utilization trends. A full dashboard template
JSON file is included in the monitor's project files for easy import.

Sample dashboard layout:

  * Storage Usage Over Time      (line chart)
  * Storage Percentage Used      (line chart)
  * Latest Storage Data          (table)
  * Storage by Site              (pie chart)
  * 30-Day Growth Rate           (table)

Sample Log Analytics queries:",
    ),
    Block::Code {
        title: "storage usage over time",
        language: "kql",
        source: r#"SharePointStorageStats_CL
| project TimeGenerated, SiteUrl_s, StorageUsed_d
| render timechart"#,
    },
    Block::Code {
        title: "storage usage by site",
        language: "kql",
        source: r#"SharePointStorageStats_CL
| summarize arg_max(TimeGenerated, *) by SiteUrl_s
| project SiteTitle_s, StorageUsed_d
| sort by StorageUsed_d desc
| render piechart"#,
    },
    Block::Code {
        title: "growth rate analysis",
        language: "kql",
        source: r#"let startDate = ago(30d);
let endDate = now();
SharePointStorageStats_CL
| where TimeGenerated >= startDate and TimeGenerated <= endDate
| summarize StartStorageUsed = min(StorageUsed_d), EndStorageUsed = max(StorageUsed_d) by SiteUrl_s
| extend GrowthMB = EndStorageUsed - StartStorageUsed
| extend GrowthPercent = iff(StartStorageUsed > 0, (GrowthMB / StartStorageUsed) * 100, 0)
| project SiteUrl_s, StartStorageUsed, EndStorageUsed, GrowthMB, GrowthPercent
| order by GrowthMB desc"#,
    },
];

const TROUBLESHOOTING: &[Block] = &[
    Block::Prose(
        "Common Issues

Authentication failures:
  * Verify client secret hasn't expired
  * Check that app has Sites.Read.All permissions
  * Ensure admin consent was granted for the permissions

Missing data in Log Analytics:
  * Check function execution logs for errors
  * Verify workspace ID and key are correct
  * Ensure sites are accessible to the app identity

Module installation failures:
  * Verify PowerShell execution policy
  * Check for network connectivity
  * Ensure function app has internet access

Diagnostic Steps

Check function logs via the Azure Portal: Function App > Functions >
SharePointStorageMonitor > Monitor tab > invocation logs.

Test the script locally:",
    ),
    Block::Code {
        title: "local diagnostic run",
        language: "powershell",
        source: r#"# Set required environment variables
$env:TenantId = "your-tenant-id"
$env:ClientId = "your-client-id"
# ... other variables

# Run script with detailed logging
./sharepoint-storage-monitor.ps1 -Verbose"#,
    },
    Block::Prose("Check if data is reaching Log Analytics:"),
    Block::Code {
        title: "verify ingestion",
        language: "kql",
        source: r#"SharePointStorageStats_CL
| where TimeGenerated > ago(24h)
| summarize count()"#,
    },
    Block::Prose(
        "If issues persist, check the function's Application Insights telemetry
for detailed error information.",
    ),
];

const MULTI_TENANT: &[Block] = &[
    Block::Prose(
        "The monitor can track storage across several SharePoint tenants from a
single Function App. Each tenant needs its own app registration and Key
Vault secret; the function iterates the tenant list on every scheduled
run and tags each record with the tenant it came from.

Add a Tenants array to the configuration:",
    ),
    Block::Code {
        title: "config.json (multi-tenant)",
        language: "json",
        source: r#"{
  "WorkspaceId": "your-log-analytics-workspace-id",
  "WorkspaceKey": "your-log-analytics-workspace-key",
  "LogName": "SharePointStorageStats",
  "Tenants": [
    {
      "TenantId": "contoso-tenant-id",
      "ClientId": "contoso-client-id",
      "SecretName": "contoso-sp-secret",
      "SharePointSites": ["contoso.sharepoint.com/sites/hr"]
    },
    {
      "TenantId": "fabrikam-tenant-id",
      "ClientId": "fabrikam-client-id",
      "SecretName": "fabrikam-sp-secret",
      "SharePointSites": ["fabrikam.sharepoint.com/sites/ops"]
    }
  ]
}"#,
    },
    Block::Prose(
        "Records carry a TenantId_g column, so existing queries can be scoped
with a single where clause:",
    ),
    Block::Code {
        title: "per-tenant usage",
        language: "kql",
        source: r#"SharePointStorageStats_CL
| where TenantId_g == "contoso-tenant-id"
| project TimeGenerated, SiteUrl_s, StorageUsed_d
| render timechart"#,
    },
];

const CICD: &[Block] = &[
    Block::Prose(
        "Deployments can be automated with GitHub Actions. The workflow below
packages the PowerShell files and publishes them to the Function App on
every push to main, using a publish profile stored as a repository
secret.",
    ),
    Block::Code {
        title: ".github/workflows/deploy.yml",
        language: "yaml",
        source: r#"name: Deploy SharePoint Storage Monitor

on:
  push:
    branches: [main]

jobs:
  deploy:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4

      - name: Package function
        run: zip -r function.zip . -i '*.ps1' '*.json'

      - name: Deploy to Azure Functions
        uses: Azure/functions-action@v1
        with:
          app-name: sharepoint-storage-monitor
          package: function.zip
          publish-profile: ${{ secrets.AZURE_FUNCTIONAPP_PUBLISH_PROFILE }}"#,
    },
    Block::Prose(
        "Rotate the publish profile after every credential change; the workflow
fails fast with an authentication error when the stored profile is stale.",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_section_has_blocks() {
        for section in Section::ALL {
            assert!(
                !blocks(section).is_empty(),
                "section {:?} has no content",
                section
            );
        }
    }

    #[test]
    fn test_code_blocks_are_nonempty() {
        for section in Section::ALL {
            for block in blocks(section) {
                if let Block::Code { title, source, .. } = block {
                    assert!(!title.is_empty());
                    assert!(!source.trim().is_empty(), "empty listing in {:?}", section);
                }
            }
        }
    }

    #[test]
    fn test_section_cycle_is_total() {
        let mut section = Section::Overview;
        for _ in 0..Section::ALL.len() {
            section = section.next();
        }
        assert_eq!(section, Section::Overview);

        let mut section = Section::Overview;
        for _ in 0..Section::ALL.len() {
            section = section.prev();
        }
        assert_eq!(section, Section::Overview);
    }

    #[test]
    fn test_from_name_round_trips_titles() {
        for section in Section::ALL {
            assert_eq!(Section::from_name(section.title()), Some(section));
        }
        assert_eq!(Section::from_name("releases"), None);
        assert_eq!(Section::from_name(""), None);
    }

    #[test]
    fn test_indexes_are_stable_and_distinct() {
        for (i, section) in Section::ALL.iter().enumerate() {
            assert_eq!(section.index(), i);
        }
    }

    #[test]
    fn test_cross_links_point_at_deployment() {
        assert_eq!(Section::Overview.cross_link(), Some(Section::Deployment));
        assert_eq!(Section::Code.cross_link(), Some(Section::Deployment));
        assert_eq!(Section::Dashboard.cross_link(), None);
    }

    #[test]
    fn test_section_text_includes_listings() {
        let text = section_text(Section::Code);
        assert!(text.contains("sharepoint-storage-monitor.ps1"));
        assert!(text.contains("Send-LogAnalyticsData"));
    }
}
