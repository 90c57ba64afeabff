//! IDs de entidades de outros módulos do sistema (ordens de serviço, clientes)
//! que aparecem como referência nos agregados deste crate.

crate::aggregate_id!(
    /// Ordem de serviço
    WorkOrderId
);

crate::aggregate_id!(
    /// Cliente
    CustomerId
);
