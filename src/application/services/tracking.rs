//! Tracking service, the operation surface consumed by the REST API

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::domain::moto::DEFAULT_STATUS;
use crate::domain::{
    DomainError, DomainResult, Leitor, Moto, Registro, RegistroDetalhado, RepositoryProvider,
};

/// Fleet-tracking operations over the injected repository provider.
///
/// One instance is shared by all request handlers. Field constraints are
/// enforced again here even though the DTO layer already validated them;
/// foreign keys are checked by the store inside the same transaction as the
/// write, so no operation can leave a dangling reference behind.
pub struct TrackingService {
    repos: Arc<dyn RepositoryProvider>,
}

impl TrackingService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    // ── Motos ───────────────────────────────────────────────────

    /// List all motos, each joined with its currently assigned reader.
    pub async fn list_motos(&self) -> DomainResult<Vec<(Moto, Option<Leitor>)>> {
        self.repos.motos().find_all_with_leitor().await
    }

    pub async fn get_moto(&self, id: i32) -> DomainResult<(Moto, Option<Leitor>)> {
        self.repos
            .motos()
            .find_with_leitor(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Moto", "id", id.to_string()))
    }

    /// Register a new moto. A missing or blank `status` falls back to
    /// "Disponível"; a non-null `leitor_id` must reference an existing reader.
    pub async fn create_moto(
        &self,
        placa: String,
        modelo: String,
        status: Option<String>,
        leitor_id: Option<i32>,
    ) -> DomainResult<Moto> {
        let status = status
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_STATUS.to_string());

        let moto = Moto {
            id: 0,
            placa,
            modelo,
            status,
            leitor_id,
            last_updated: Utc::now(),
        };
        moto.validate()?;

        let created = self.repos.motos().insert(moto).await?;
        info!(moto_id = created.id, placa = %created.placa, "Moto created");
        Ok(created)
    }

    /// Full replace of all mutable fields; `last_updated` is refreshed by the
    /// store. There is no partial patch.
    pub async fn update_moto(
        &self,
        id: i32,
        placa: String,
        modelo: String,
        status: String,
        leitor_id: Option<i32>,
    ) -> DomainResult<Moto> {
        let moto = Moto {
            id,
            placa,
            modelo,
            status,
            leitor_id,
            last_updated: Utc::now(),
        };
        moto.validate()?;

        let updated = self.repos.motos().update(moto).await?;
        info!(moto_id = updated.id, placa = %updated.placa, "Moto updated");
        Ok(updated)
    }

    pub async fn delete_moto(&self, id: i32) -> DomainResult<()> {
        self.repos.motos().delete(id).await?;
        info!(moto_id = id, "Moto deleted");
        Ok(())
    }

    // ── Leitores ────────────────────────────────────────────────

    /// List all readers, each joined with the motos currently assigned to it.
    pub async fn list_leitores(&self) -> DomainResult<Vec<(Leitor, Vec<Moto>)>> {
        self.repos.leitores().find_all_with_motos().await
    }

    pub async fn get_leitor(&self, id: i32) -> DomainResult<(Leitor, Vec<Moto>)> {
        self.repos
            .leitores()
            .find_with_motos(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Leitor", "id", id.to_string()))
    }

    pub async fn create_leitor(&self, nome: String, localizacao: String) -> DomainResult<Leitor> {
        let leitor = Leitor {
            id: 0,
            nome,
            localizacao,
        };
        leitor.validate()?;

        let created = self.repos.leitores().insert(leitor).await?;
        info!(leitor_id = created.id, nome = %created.nome, "Leitor created");
        Ok(created)
    }

    pub async fn update_leitor(
        &self,
        id: i32,
        nome: String,
        localizacao: String,
    ) -> DomainResult<Leitor> {
        let leitor = Leitor {
            id,
            nome,
            localizacao,
        };
        leitor.validate()?;

        let updated = self.repos.leitores().update(leitor).await?;
        info!(leitor_id = updated.id, nome = %updated.nome, "Leitor updated");
        Ok(updated)
    }

    pub async fn delete_leitor(&self, id: i32) -> DomainResult<()> {
        self.repos.leitores().delete(id).await?;
        info!(leitor_id = id, "Leitor deleted");
        Ok(())
    }

    // ── Registros ───────────────────────────────────────────────

    /// The detection trail: every scan record joined with its moto and
    /// reader, most recent first.
    pub async fn list_registros(&self) -> DomainResult<Vec<RegistroDetalhado>> {
        self.repos.registros().find_all_detalhado().await
    }

    pub async fn get_registro(&self, id: i32) -> DomainResult<RegistroDetalhado> {
        self.repos
            .registros()
            .find_detalhado(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Registro", "id", id.to_string()))
    }

    /// Append a detection event. The timestamp is assigned server-side;
    /// the moto's own `leitor_id` pointer is deliberately left untouched,
    /// since current assignment and scan history are maintained independently.
    pub async fn create_registro(&self, moto_id: i32, leitor_id: i32) -> DomainResult<Registro> {
        let registro = Registro {
            id: 0,
            moto_id,
            leitor_id,
            timestamp: Utc::now(),
        };

        let created = self.repos.registros().insert(registro).await?;
        info!(
            registro_id = created.id,
            moto_id = created.moto_id,
            leitor_id = created.leitor_id,
            "Registro created"
        );
        Ok(created)
    }

    /// Remove a scan record. Deletion is the only mutation the log supports;
    /// correcting a mistaken entry is delete + re-insert.
    pub async fn delete_registro(&self, id: i32) -> DomainResult<()> {
        self.repos.registros().delete(id).await?;
        info!(registro_id = id, "Registro deleted");
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::MemoryStorage;

    fn service() -> TrackingService {
        TrackingService::new(Arc::new(MemoryStorage::new()))
    }

    #[tokio::test]
    async fn create_moto_defaults_status_and_roundtrips() {
        let svc = service();

        let created = svc
            .create_moto("ABC1234".into(), "CG 160".into(), None, None)
            .await
            .unwrap();
        assert_eq!(created.status, DEFAULT_STATUS);

        let (found, leitor) = svc.get_moto(created.id).await.unwrap();
        assert_eq!(found, created);
        assert!(leitor.is_none());
    }

    #[tokio::test]
    async fn create_moto_keeps_explicit_status() {
        let svc = service();

        let created = svc
            .create_moto(
                "ABC1234".into(),
                "CG 160".into(),
                Some("Em manutenção".into()),
                None,
            )
            .await
            .unwrap();
        assert_eq!(created.status, "Em manutenção");
    }

    #[tokio::test]
    async fn blank_status_is_treated_as_unset() {
        let svc = service();

        let created = svc
            .create_moto("ABC1234".into(), "CG 160".into(), Some("   ".into()), None)
            .await
            .unwrap();
        assert_eq!(created.status, DEFAULT_STATUS);
    }

    #[tokio::test]
    async fn create_moto_ids_are_unique() {
        let svc = service();

        let a = svc
            .create_moto("ABC1234".into(), "CG 160".into(), None, None)
            .await
            .unwrap();
        let b = svc
            .create_moto("DEF5678".into(), "Biz".into(), None, None)
            .await
            .unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn empty_placa_is_invalid_input_and_nothing_is_inserted() {
        let svc = service();

        let err = svc
            .create_moto("".into(), "CG 160".into(), None, None)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert!(svc.list_motos().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn placa_over_ten_chars_is_invalid_input() {
        let svc = service();

        let err = svc
            .create_moto("ABCDEFGHIJK".into(), "CG 160".into(), None, None)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn unknown_leitor_reference_is_rejected() {
        let svc = service();

        let err = svc
            .create_moto("XYZ9999".into(), "Biz".into(), None, Some(999))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidReference(_)));
        assert!(svc.list_motos().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_moto_replaces_fields_and_advances_last_updated() {
        let svc = service();

        let created = svc
            .create_moto("ABC1234".into(), "CG 160".into(), None, None)
            .await
            .unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;

        let updated = svc
            .update_moto(
                created.id,
                "XYZ9876".into(),
                "CG 160".into(),
                "Em manutenção".into(),
                None,
            )
            .await
            .unwrap();

        assert_eq!(updated.placa, "XYZ9876");
        assert_eq!(updated.status, "Em manutenção");
        assert!(updated.last_updated > created.last_updated);

        let (found, _) = svc.get_moto(created.id).await.unwrap();
        assert_eq!(found, updated);
    }

    #[tokio::test]
    async fn update_missing_moto_is_not_found() {
        let svc = service();

        let err = svc
            .update_moto(42, "ABC1234".into(), "CG 160".into(), "Disponível".into(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn update_moto_with_dangling_leitor_is_rejected() {
        let svc = service();

        let created = svc
            .create_moto("ABC1234".into(), "CG 160".into(), None, None)
            .await
            .unwrap();

        let err = svc
            .update_moto(
                created.id,
                "ABC1234".into(),
                "CG 160".into(),
                "Disponível".into(),
                Some(999),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidReference(_)));
    }

    #[tokio::test]
    async fn delete_moto_then_get_is_not_found() {
        let svc = service();

        let created = svc
            .create_moto("ABC1234".into(), "CG 160".into(), None, None)
            .await
            .unwrap();
        svc.delete_moto(created.id).await.unwrap();

        let err = svc.get_moto(created.id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn moto_joined_with_its_reader() {
        let svc = service();

        let leitor = svc
            .create_leitor("Portão 1".into(), "Entrada".into())
            .await
            .unwrap();
        let moto = svc
            .create_moto("ABC1234".into(), "CG 160".into(), None, Some(leitor.id))
            .await
            .unwrap();

        let (_, joined) = svc.get_moto(moto.id).await.unwrap();
        assert_eq!(joined.unwrap().nome, "Portão 1");
    }

    #[tokio::test]
    async fn get_leitor_is_idempotent_between_writes() {
        let svc = service();

        let leitor = svc
            .create_leitor("Portão 1".into(), "Entrada".into())
            .await
            .unwrap();

        let first = svc.get_leitor(leitor.id).await.unwrap();
        let second = svc.get_leitor(leitor.id).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn empty_leitor_fields_are_invalid_input() {
        let svc = service();

        let err = svc
            .create_leitor("".into(), "Entrada".into())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));

        let err = svc
            .create_leitor("Portão 1".into(), "  ".into())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn deleting_a_referenced_leitor_is_a_conflict() {
        let svc = service();

        let leitor = svc
            .create_leitor("Portão 1".into(), "Entrada".into())
            .await
            .unwrap();
        let moto = svc
            .create_moto("ABC1234".into(), "CG 160".into(), None, Some(leitor.id))
            .await
            .unwrap();

        let err = svc.delete_leitor(leitor.id).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));

        // Unassigning the moto unblocks the delete
        svc.update_moto(
            moto.id,
            moto.placa.clone(),
            moto.modelo.clone(),
            moto.status.clone(),
            None,
        )
        .await
        .unwrap();
        svc.delete_leitor(leitor.id).await.unwrap();
    }

    #[tokio::test]
    async fn registro_with_unknown_references_leaves_trail_unchanged() {
        let svc = service();

        let leitor = svc
            .create_leitor("Portão 1".into(), "Entrada".into())
            .await
            .unwrap();
        let moto = svc
            .create_moto("ABC1234".into(), "CG 160".into(), None, None)
            .await
            .unwrap();

        let err = svc.create_registro(999, leitor.id).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidReference(_)));

        let err = svc.create_registro(moto.id, 999).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidReference(_)));

        assert!(svc.list_registros().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn registro_timestamp_is_server_assigned() {
        let svc = service();

        let leitor = svc
            .create_leitor("Portão 1".into(), "Entrada".into())
            .await
            .unwrap();
        let moto = svc
            .create_moto("ABC1234".into(), "CG 160".into(), None, None)
            .await
            .unwrap();

        let registro = svc.create_registro(moto.id, leitor.id).await.unwrap();
        assert!((Utc::now() - registro.timestamp).num_seconds().abs() < 5);
    }

    #[tokio::test]
    async fn trail_is_ordered_most_recent_first() {
        let svc = service();

        let leitor = svc
            .create_leitor("Portão 1".into(), "Entrada".into())
            .await
            .unwrap();
        let moto = svc
            .create_moto("ABC1234".into(), "CG 160".into(), None, None)
            .await
            .unwrap();

        for _ in 0..3 {
            svc.create_registro(moto.id, leitor.id).await.unwrap();
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        }

        let trail = svc.list_registros().await.unwrap();
        assert_eq!(trail.len(), 3);
        for pair in trail.windows(2) {
            assert!(pair[0].registro.timestamp >= pair[1].registro.timestamp);
        }
    }

    #[tokio::test]
    async fn delete_registro_unblocks_moto_delete() {
        let svc = service();

        let leitor = svc
            .create_leitor("Portão 1".into(), "Entrada".into())
            .await
            .unwrap();
        let moto = svc
            .create_moto("ABC1234".into(), "CG 160".into(), None, None)
            .await
            .unwrap();
        let registro = svc.create_registro(moto.id, leitor.id).await.unwrap();

        let err = svc.delete_moto(moto.id).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));

        svc.delete_registro(registro.id).await.unwrap();
        svc.delete_moto(moto.id).await.unwrap();
    }

    #[tokio::test]
    async fn full_scenario_reader_moto_and_scan() {
        let svc = service();

        let leitor = svc
            .create_leitor("Portão 1".into(), "Entrada".into())
            .await
            .unwrap();
        assert_eq!(leitor.id, 1);

        let moto = svc
            .create_moto("ABC1234".into(), "CG160".into(), None, Some(leitor.id))
            .await
            .unwrap();
        assert_eq!(moto.id, 1);
        assert_eq!(moto.status, DEFAULT_STATUS);

        let registro = svc.create_registro(moto.id, leitor.id).await.unwrap();
        assert_eq!(registro.id, 1);

        let leitores = svc.list_leitores().await.unwrap();
        assert_eq!(leitores.len(), 1);
        let (joined_leitor, motos) = &leitores[0];
        assert_eq!(joined_leitor.id, leitor.id);
        assert_eq!(motos.len(), 1);
        assert_eq!(motos[0].id, moto.id);

        let trail = svc.list_registros().await.unwrap();
        assert_eq!(trail.len(), 1);
        assert_eq!(trail[0].registro.id, registro.id);
        assert_eq!(trail[0].moto.placa, "ABC1234");
        assert_eq!(trail[0].leitor.nome, "Portão 1");
    }
}
