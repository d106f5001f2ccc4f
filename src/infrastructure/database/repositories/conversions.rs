//! Entity → domain conversions shared by the repositories

use crate::domain::leitor::Leitor;
use crate::domain::moto::Moto;
use crate::domain::registro::Registro;
use crate::infrastructure::database::entities::{leitor, moto, registro};

pub fn moto_to_domain(m: moto::Model) -> Moto {
    Moto {
        id: m.id,
        placa: m.placa,
        modelo: m.modelo,
        status: m.status,
        leitor_id: m.leitor_id,
        last_updated: m.last_updated,
    }
}

pub fn leitor_to_domain(l: leitor::Model) -> Leitor {
    Leitor {
        id: l.id,
        nome: l.nome,
        localizacao: l.localizacao,
    }
}

pub fn registro_to_domain(r: registro::Model) -> Registro {
    Registro {
        id: r.id,
        moto_id: r.moto_id,
        leitor_id: r.leitor_id,
        timestamp: r.timestamp,
    }
}
