//! Static marketing copy: products, services, status regions.

use super::i18n::Language;
use super::nav::ProductId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Computing,
    Storage,
    Network,
}

impl Category {
    pub fn label(self, lang: Language) -> &'static str {
        let s = lang.strings();
        match self {
            Self::Computing => s.computing,
            Self::Storage => s.storage,
            Self::Network => s.network,
        }
    }
}

/// Text in both interface languages.
#[derive(Debug, Clone, Copy)]
pub struct Localized {
    pub ko: &'static str,
    pub en: &'static str,
}

impl Localized {
    pub fn get(&self, lang: Language) -> &'static str {
        match lang {
            Language::Ko => self.ko,
            Language::En => self.en,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Spec {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Product {
    pub id: ProductId,
    pub category: Category,
    pub title: Localized,
    pub desc: Localized,
    pub features: [&'static str; 3],
    pub specs: [Spec; 3],
}

const fn spec(label: &'static str, value: &'static str) -> Spec {
    Spec { label, value }
}

pub static PRODUCTS: [Product; 8] = [
    Product {
        id: ProductId::CloudCompute,
        category: Category::Computing,
        title: Localized { ko: "클라우드 컴퓨트", en: "Cloud Compute" },
        desc: Localized {
            ko: "필요한 만큼 즉시 생성하는 가상 서버",
            en: "Virtual servers provisioned the moment you need them",
        },
        features: ["Virtual CPU Isolation", "Memory Encryption", "Instant Provisioning"],
        specs: [
            spec("vCPU", "Up to 96 Cores"),
            spec("Memory", "Up to 384GB"),
            spec("Network", "25 Gbps"),
        ],
    },
    Product {
        id: ProductId::BareMetal,
        category: Category::Computing,
        title: Localized { ko: "베어메탈", en: "Bare Metal" },
        desc: Localized {
            ko: "가상화 없이 물리 서버를 단독으로 사용",
            en: "Dedicated physical servers without a hypervisor",
        },
        features: [
            "No Virtualization Overhead",
            "Direct Hardware Access",
            "Custom Kernel Support",
        ],
        specs: [
            spec("Processor", "Intel Xeon Platinum"),
            spec("Storage", "NVMe Local RAID"),
            spec("Uplink", "100 Gbps Dedicated"),
        ],
    },
    Product {
        id: ProductId::AutoScaling,
        category: Category::Computing,
        title: Localized { ko: "오토 스케일링", en: "Auto Scaling" },
        desc: Localized {
            ko: "트래픽에 맞춰 자동으로 늘고 줄어드는 서버",
            en: "Capacity that follows your traffic automatically",
        },
        features: ["Traffic-based Scaling", "Scheduled Actions", "Health Check Integration"],
        specs: [
            spec("Trigger", "CPU / Network / Custom"),
            spec("Cooldown", "Configurable"),
            spec("Cost", "Pay per Second"),
        ],
    },
    Product {
        id: ProductId::Hdd,
        category: Category::Storage,
        title: Localized { ko: "HDD 블록 스토리지", en: "HDD Block Storage" },
        desc: Localized {
            ko: "대용량 데이터를 위한 합리적인 블록 스토리지",
            en: "Cost-effective block storage for large data sets",
        },
        features: ["High Capacity", "Cost Effective", "Data Archiving"],
        specs: [
            spec("Max Size", "16TB per Volume"),
            spec("Throughput", "350 MB/s"),
            spec("Redundancy", "Triple Replica"),
        ],
    },
    Product {
        id: ProductId::Nas,
        category: Category::Storage,
        title: Localized { ko: "NAS", en: "NAS" },
        desc: Localized {
            ko: "여러 서버가 함께 쓰는 공유 파일 스토리지",
            en: "Shared file storage for many servers at once",
        },
        features: ["Shared File System", "NFS/CIFS Support", "Snapshot Management"],
        specs: [
            spec("Protocol", "NFSv4 / SMB"),
            spec("Capacity", "Elastic"),
            spec("Access", "VPC Internal"),
        ],
    },
    Product {
        id: ProductId::Firewall,
        category: Category::Network,
        title: Localized { ko: "방화벽", en: "Firewall" },
        desc: Localized {
            ko: "인바운드와 아웃바운드 트래픽을 정책으로 제어",
            en: "Policy control over inbound and outbound traffic",
        },
        features: ["Stateful Inspection", "Rule-based Filtering", "VPN Support"],
        specs: [
            spec("Rules", "Inbound / Outbound"),
            spec("Logging", "Real-time"),
            spec("Type", "Managed Service"),
        ],
    },
    Product {
        id: ProductId::Ddos,
        category: Category::Network,
        title: Localized { ko: "DDoS 방어", en: "DDoS Protection" },
        desc: Localized {
            ko: "대규모 공격에도 멈추지 않는 상시 방어",
            en: "Always-on mitigation against volumetric attacks",
        },
        features: ["Traffic Scrubbing", "Bot Mitigation", "Layer 7 Protection"],
        specs: [
            spec("Capacity", "2 Tbps+"),
            spec("Latency", "< 1ms Added"),
            spec("Activation", "Always On"),
        ],
    },
    Product {
        id: ProductId::LoadBalancing,
        category: Category::Network,
        title: Localized { ko: "로드 밸런싱", en: "Load Balancing" },
        desc: Localized {
            ko: "여러 서버로 트래픽을 고르게 분산",
            en: "Spread traffic evenly across your servers",
        },
        features: ["Round Robin", "Least Connection", "SSL Termination"],
        specs: [
            spec("Type", "L4 / L7"),
            spec("Health Check", "TCP / HTTP(S)"),
            spec("SSL", "Free Certs"),
        ],
    },
];

pub fn product(id: ProductId) -> &'static Product {
    // PRODUCTS is laid out in ProductId::ALL order
    let idx = ProductId::ALL.iter().position(|p| *p == id).unwrap_or(0);
    &PRODUCTS[idx]
}

/// Landing-page feature blurbs.
pub static FEATURES: [Localized; 3] = [
    Localized { ko: "국내 리전 초저지연 네트워크", en: "Ultra-low latency domestic regions" },
    Localized { ko: "99.99% 가동률 SLA", en: "99.99% uptime SLA" },
    Localized { ko: "초 단위 과금", en: "Per-second billing" },
];

/// Landing-page service cards (the "pricing" section).
pub static SERVICES: [(Localized, ProductId); 3] = [
    (Localized { ko: "보안 컴퓨팅", en: "Secure Compute" }, ProductId::CloudCompute),
    (Localized { ko: "DDoS 방어", en: "DDoS Shield" }, ProductId::Ddos),
    (Localized { ko: "유연한 확장", en: "Elastic Scale" }, ProductId::AutoScaling),
];

#[derive(Debug, Clone, Copy)]
pub struct Region {
    pub name: &'static str,
    pub latency: &'static str,
}

pub static REGIONS: [Region; 5] = [
    Region { name: "Seoul (KR-SEL-1)", latency: "2ms" },
    Region { name: "Tokyo (JP-TYO-2)", latency: "35ms" },
    Region { name: "Virginia (US-EAST-1)", latency: "180ms" },
    Region { name: "Frankfurt (EU-CENTRAL)", latency: "210ms" },
    Region { name: "Singapore (AP-SE-1)", latency: "80ms" },
];

pub const UPTIME: &str = "99.99%";
pub const API_AVAILABILITY: &str = "100%";
