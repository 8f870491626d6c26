use pretty::{Arena, DocAllocator, DocBuilder};

use super::{AliasingKind, RegisterCode, RegisterConfiguration};
use crate::repr::Representation;

pub struct Prettier<'a> {
    config: &'a RegisterConfiguration,
    allocator: Arena<'a>,
    width: usize,
}

impl<'a> Prettier<'a> {
    pub fn new(config: &'a RegisterConfiguration) -> Self {
        Self {
            config,
            allocator: Arena::new(),
            width: 80,
        }
    }

    pub fn with_width(self, width: usize) -> Self {
        Self { width, ..self }
    }

    #[must_use]
    pub fn pretty_configuration(&'a self) -> String {
        let doc = self.doc_configuration();
        let mut res = Vec::new();
        doc.render(self.width, &mut res).unwrap();
        String::from_utf8(res).unwrap()
    }

    #[must_use]
    pub fn pretty_registers(&'a self, rep: Representation, codes: &[RegisterCode]) -> String {
        let doc = self.doc_registers(rep, codes);
        let mut res = Vec::new();
        doc.render(self.width, &mut res).unwrap();
        String::from_utf8(res).unwrap()
    }

    fn doc_configuration(&'a self) -> DocBuilder<Arena<'a>> {
        let kind = match self.config.aliasing_kind() {
            AliasingKind::Overlap => "overlap",
            AliasingKind::Combine => "combine",
        };

        self.allocator
            .text(format!("aliasing: {kind}"))
            .append(self.allocator.hardline())
            .append(self.doc_class(
                Representation::General,
                self.config.num_general_registers(),
                self.config.allocatable_general_codes(),
                Some(self.config.allocatable_general_codes_mask()),
            ))
            .append(self.allocator.hardline())
            .append(self.doc_class(
                Representation::Float64,
                self.config.num_double_registers(),
                self.config.allocatable_double_codes(),
                Some(self.config.allocatable_double_codes_mask()),
            ))
            .append(self.allocator.hardline())
            .append(self.doc_class(
                Representation::Float32,
                self.config.num_float_registers(),
                self.config.allocatable_float_codes(),
                None,
            ))
    }

    fn doc_class(
        &'a self,
        rep: Representation,
        total: usize,
        codes: &[RegisterCode],
        mask: Option<u32>,
    ) -> DocBuilder<Arena<'a>> {
        let mut header = format!("{rep}: {total} registers, {} allocatable", codes.len());
        if let Some(mask) = mask {
            header.push_str(&format!(" (mask {mask:#010x})"));
        }

        self.allocator
            .text(header)
            .append(self.allocator.hardline().append(self.doc_registers(rep, codes)).nest(2))
    }

    fn doc_registers(&'a self, rep: Representation, codes: &[RegisterCode]) -> DocBuilder<Arena<'a>> {
        self.allocator
            .intersperse(
                codes
                    .iter()
                    .map(|code| self.allocator.text(self.config.register_name(rep, *code))),
                self.allocator.softline(),
            )
    }
}
