//! Built-in provider table.
//!
//! Order is precedence: the first rule with a matching nameserver wins.

/// `(provider, pattern)` pairs, compiled case-insensitively.
pub(crate) const BUILTIN_RULES: &[(&str, &str)] = &[
    // Major global managed DNS providers
    ("Akamai Edge DNS", r"\.akamaiedgedns\.(com|net)$"), // ns1-2048.akamaiedgedns.net
    ("Amazon Route 53", r"awsdns-[0-9a-z]+\.(?:com|net|org|co\.uk)$"), // ns-2048.awsdns-64.net
    ("Azure DNS", r"\.azure-dns\.(?:com|net|org|info)$"), // ns1-01.azure-dns.com
    (
        "Google Cloud DNS",
        r"\.(?:ns-cloud-[a-z]\d+)\.googledomains\.com$",
    ), // needs a label before ns-cloud-*, so bare ns-cloud-a1.googledomains.com is Unknown
    ("Cloudflare", r"\.(?:ns[0-9]+\.)?cloudflare\.com$"), // alice.ns.cloudflare.com
    // Specialist / API-driven providers
    ("NS1", r"\.nsone\.net$"),
    ("DNS Made Easy", r"\.dnsmadeeasy\.com$"),
    ("Dyn (Oracle Dyn DNS)", r"\.dynect\.net$"),
    ("easyDNS", r"\.easydns\.com$"),
    ("DNSimple", r"\.dnsimple\.com$"),
    // Cloud-hosted / IaaS providers
    ("DigitalOcean", r"\.digitalocean\.com$"),
    ("Linode", r"\.linode\.com$"),
    ("Hetzner", r"\.dns\.hetzner\.com$"),
    ("OVHcloud", r"\.ovh\.(?:net|com|ca|us|co\.uk|cloud)$"),
    ("Alibaba Cloud DNS", r"\.alidns\.com$"),
    ("Oracle Cloud DNS", r"\.oraclecloud\.net$"),
    // Registrar-backed / hosting providers
    ("GoDaddy", r"\.domaincontrol\.com$"),
    ("Namecheap", r"\.registrar-servers\.com$"),
    ("Bluehost", r"\.bluehost\.com$"),
    ("DreamHost", r"\.dreamhost\.com$"),
    ("HostGator", r"\.hostgator\.com$"),
    ("1&1 IONOS", r"\.ionos\.com$"),
    ("Name.com", r"\.name\.com$"),
    ("iPage", r"\.ipage\.com$"),
    ("Register.com", r"\.register\.com$"),
    ("Network Solutions", r"\.worldnic\.com$"),
    ("NameSilo", r"\.namesilo\.com$"),
    ("ClouDNS", r"\.cloudns\.net$"),
    ("BuddyNS", r"\.buddyns\.com$"),
    ("TransIP", r"\.transip\.(?:net|nl|eu)$"),
    ("Hurricane Electric", r"\.he\.net$"),
    ("1984 Hosting", r"\.1984hosting\.com$"),
    ("Geoscaling", r"\.geoscaling\.com$"),
    ("DNSPod", r"\.dnspod\.net$"),
    ("CDNetworks", r"\.cdnetworks\.net$"),
    ("Gandi", r"\.gandi\.net$"),
];
