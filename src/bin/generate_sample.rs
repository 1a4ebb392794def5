use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, Url, Workbook};

const PROTOTYPES: [(&str, &[&str]); 8] = [
    ("Lotus leaf", &["PDMS", "SiO2", "Wax"]),
    ("Moth eye", &["PMMA", "Si", "TiO2"]),
    ("Cicada wing", &["Ag", "PDMS", "Si"]),
    ("Butterfly wing", &["TiO2", "SiO2", "Chitosan"]),
    ("Rice leaf", &["PDMS", "Epoxy"]),
    ("Shark skin", &["PU", "Resin"]),
    ("Desert beetle", &["PDMS", "Cu", "Graphene"]),
    ("Compound eye", &["PMMA", "NOA61"]),
];

const TAGS: [&str; 15] = [
    "Antifogging",
    "Self-cleaning",
    "Antireflective",
    "Antibacterial",
    "Anti-icing",
    "Antiwetting",
    "Large FOV",
    "Fast motion detection",
    "Structural color",
    "Droplet directional migration",
    "Anti-drag",
    "Water collection",
    "Self-propelled actuator",
    "Superhydrophobic",
    "Drag reduction",
];

const METHODS: [&str; 7] = [
    "Etching",
    "Coating",
    "Lithography",
    "Molding",
    "Self-assembly",
    "Laser ablation",
    "3D printing",
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    /// Pick `count` distinct items, in pick order.
    fn pick<'a>(&mut self, items: &[&'a str], count: usize) -> Vec<&'a str> {
        let mut out: Vec<&str> = Vec::with_capacity(count);
        while out.len() < count.min(items.len()) {
            let item = items[self.below(items.len())];
            if !out.contains(&item) {
                out.push(item);
            }
        }
        out
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let output_path = std::path::Path::new("data/table.xlsx");
    if let Some(dir) = output_path.parent() {
        std::fs::create_dir_all(dir).context("creating data directory")?;
    }

    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();
    let sheet = workbook.add_worksheet();

    let headers = ["Bionic prototype", "Materials", "Method", "Multifunction", "Res link"];
    for (c, h) in headers.iter().enumerate() {
        sheet.write_string_with_format(0, c as u16, *h, &bold)?;
    }

    let n_rows: u32 = 40;
    for row in 1..=n_rows {
        let (prototype, materials) = PROTOTYPES[rng.below(PROTOTYPES.len())];
        let n_mat = 1 + rng.below(2);
        let n_methods = 1 + rng.below(2);
        let n_tags = 1 + rng.below(3);

        // Trailing spaces mirror the hand-edited source sheets.
        sheet.write_string(row, 0, format!("{prototype} "))?;
        sheet.write_string(row, 1, rng.pick(materials, n_mat).join("; "))?;
        sheet.write_string(row, 2, rng.pick(&METHODS, n_methods).join("; "))?;
        sheet.write_string(row, 3, format!("{} ", rng.pick(&TAGS, n_tags).join("; ")))?;
        sheet.write_url(row, 4, Url::new(format!("https://doi.org/10.0000/bionic.{row:03}")))?;
    }

    workbook.save(output_path).context("writing workbook")?;
    println!("Wrote {n_rows} prototypes to {}", output_path.display());
    Ok(())
}
